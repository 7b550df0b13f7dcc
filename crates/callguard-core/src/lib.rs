//! # CallGuard Core
//!
//! Pure call-contract primitives for a hardware-device API client.
//!
//! This crate contains no I/O, no device communication and no shared state.
//! Every function is a decision over its arguments.
//!
//! ## Key Operations
//!
//! - [`validate_params`] - Check caller values against declared [`ParameterSpec`]s
//! - [`validate_coin_path`] - Check a derivation path's coin type against a coin
//! - [`resolve_firmware_range`] - Compute the firmware range a call may run on
//!
//! ## Key Types
//!
//! - [`ValueBag`] / [`ParamValue`] - Caller-supplied parameters
//! - [`CoinDescriptor`] - A registered coin with its minimum firmware
//! - [`FirmwareRange`] - Min/max firmware per device generation
//! - [`OverrideEntry`] - A configured firmware override
//!
//! ## Versions
//!
//! Firmware versions are dotted strings compared with [`version_compare`].
//! The string `"0"` is the "no bound" sentinel.

pub mod coin;
pub mod error;
pub mod firmware;
pub mod path;
pub mod range;
pub mod types;
pub mod validation;
pub mod value;
pub mod version;

pub use coin::{CoinDescriptor, CoinSupport};
pub use error::{Result, ValidationError, INVALID_PARAMETER_CODE};
pub use firmware::{find_override, resolve_firmware_range};
pub use path::{from_hardened, to_hardened, HARDENED};
pub use range::{CoinSelector, FirmwareRange, Generation, GenerationRange, OverrideEntry};
pub use types::{ParamKind, ParameterSpec};
pub use validation::{is_integer_amount, validate_coin_path, validate_params};
pub use value::{ParamValue, ValueBag};
pub use version::{version_compare, UNBOUNDED};
