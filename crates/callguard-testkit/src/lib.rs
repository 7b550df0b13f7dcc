//! # CallGuard Testkit
//!
//! Testing utilities for CallGuard.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known method/coin pairs with their expected firmware ranges
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A bundled coin registry and configuration document
//!
//! ## Golden Vectors
//!
//! ```rust
//! use callguard_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: got {actual:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use callguard_testkit::generators::ContractCase;
//!
//! proptest! {
//!     #[test]
//!     fn satisfied_contracts_pass(case: ContractCase) {
//!         prop_assert!(validate_params(&case.values, &case.fields).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{default_range, TestFixture};
pub use generators::ContractCase;
pub use vectors::{all_vectors, resolve_vector, verify_all_vectors, GoldenVector};
