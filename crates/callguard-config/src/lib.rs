//! # CallGuard Config
//!
//! Configuration snapshots and coin registry for CallGuard.
//!
//! ## Overview
//!
//! The firmware resolver needs the configured override table, and the
//! orchestration layer needs to turn a coin shortcut into a descriptor.
//! This crate parses both documents and hands them out as read-only values.
//!
//! ## Key Types
//!
//! - [`Config`] - Parsed configuration document (`supportedFirmware` table)
//! - [`ConfigProvider`] - Source of `Arc<Config>` snapshots
//! - [`StaticConfig`] - Provider over a fixed document
//! - [`SharedConfig`] - Provider whose document can be replaced at runtime
//! - [`CoinRegistry`] - Coin descriptors by shortcut or slip44
//!
//! ## Usage
//!
//! ```rust
//! use callguard_config::{Config, ConfigProvider, StaticConfig};
//!
//! let config = Config::from_json_str(r#"{
//!     "supportedFirmware": [{ "coinType": "ethereum", "min": ["1.6.2", "2.0.7"] }]
//! }"#).unwrap();
//!
//! let provider = StaticConfig::new(config);
//! assert_eq!(provider.snapshot().overrides().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod registry;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use provider::{ConfigProvider, SharedConfig, StaticConfig};
pub use registry::CoinRegistry;
