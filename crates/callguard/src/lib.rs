//! # CallGuard
//!
//! Call-contract enforcement for a hardware-device API client.
//!
//! ## Overview
//!
//! Before an API method talks to the device, CallGuard decides whether the
//! call is well formed and which firmware it may run on:
//!
//! - **Parameter contracts**: caller values checked against declared specs
//! - **Coin paths**: the derivation path's coin type must match the coin
//! - **Firmware ranges**: base range, narrowed by the coin's declared
//!   support, adjusted by configured overrides
//!
//! Nothing here performs I/O against a device. Comparing the resolved range
//! with the connected firmware is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use callguard::{CallGuard, MethodCall};
//! use callguard::core::{
//!     to_hardened, CoinDescriptor, Generation, ParamKind, ParamValue, ParameterSpec, ValueBag,
//! };
//!
//! let guard = CallGuard::from_json_str(r#"{
//!     "supportedFirmware": [{ "coinType": "ethereum", "min": ["1.8.0", "2.1.0"] }]
//! }"#).unwrap();
//!
//! let coin = CoinDescriptor::new(60, "ETH")
//!     .with_type("ethereum")
//!     .with_support(Generation::One, "1.6.2")
//!     .with_support(Generation::Two, "2.0.7");
//!
//! let path = vec![to_hardened(44), to_hardened(60), to_hardened(0)];
//! let params = ValueBag::new().with(
//!     "path",
//!     path.iter().map(|&i| ParamValue::from(i)).collect::<Vec<_>>(),
//! );
//!
//! let call = MethodCall::new("getAddress", params)
//!     .fields(vec![ParameterSpec::new("path", ParamKind::Array).obligatory()])
//!     .coin(coin)
//!     .path(path);
//!
//! let range = guard.check(&call).unwrap();
//! assert_eq!(range.gen_one.min, "1.8.0");
//! ```
//!
//! ## Re-exports
//!
//! - `callguard::core` - Contract primitives and the pure resolver
//! - `callguard::config` - Configuration snapshots and coin registry

pub mod error;
pub mod guard;

pub use callguard_config as config;
pub use callguard_core as core;

pub use error::{GuardError, Result};
pub use guard::{CallGuard, MethodCall};

pub use callguard_config::{CoinRegistry, Config, ConfigProvider, SharedConfig, StaticConfig};
pub use callguard_core::{
    CoinDescriptor, FirmwareRange, GenerationRange, OverrideEntry, ParamKind, ParamValue,
    ParameterSpec, ValidationError, ValueBag,
};
