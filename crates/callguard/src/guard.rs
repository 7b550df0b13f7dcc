//! The CallGuard: the checks an API method runs before talking to a device.
//!
//! Contract checks run first and fail fast; only a call that passes them
//! gets a firmware range, which the caller then compares against the
//! connected device.

use callguard_config::{Config, ConfigProvider, StaticConfig};
use callguard_core::{
    resolve_firmware_range, validate_coin_path, validate_params, CoinDescriptor, FirmwareRange,
    ParameterSpec, ValueBag,
};

use crate::error::{GuardError, Result};

/// Everything known about a method call before it reaches the device.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Method name, as used in override `excludedMethods` lists.
    pub method: String,
    /// Caller-supplied parameters.
    pub params: ValueBag,
    /// Declared parameter contract.
    pub fields: Vec<ParameterSpec>,
    /// Coin the call targets, if any.
    pub coin: Option<CoinDescriptor>,
    /// Derivation path to check against the coin, if any.
    pub path: Option<Vec<u32>>,
    /// The method's default firmware range.
    pub base: FirmwareRange,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, params: ValueBag) -> Self {
        Self {
            method: method.into(),
            params,
            fields: Vec::new(),
            coin: None,
            path: None,
            base: FirmwareRange::default(),
        }
    }

    pub fn fields(mut self, fields: Vec<ParameterSpec>) -> Self {
        self.fields = fields;
        self
    }

    pub fn coin(mut self, coin: CoinDescriptor) -> Self {
        self.coin = Some(coin);
        self
    }

    pub fn path(mut self, path: Vec<u32>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn base(mut self, base: FirmwareRange) -> Self {
        self.base = base;
        self
    }
}

/// Call-contract enforcement over a configuration provider.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct CallGuard<P: ConfigProvider> {
    provider: P,
}

impl CallGuard<StaticConfig> {
    /// A guard over a fixed configuration.
    pub fn with_config(config: Config) -> Self {
        Self::new(StaticConfig::new(config))
    }

    /// A guard over a configuration document.
    pub fn from_json_str(document: &str) -> Result<Self> {
        Ok(Self::with_config(Config::from_json_str(document)?))
    }
}

impl<P: ConfigProvider> CallGuard<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Check caller values against the declared parameter contract.
    pub fn validate_params(&self, values: &ValueBag, fields: &[ParameterSpec]) -> Result<()> {
        validate_params(values, fields).map_err(|e| {
            tracing::debug!(code = e.code(), "Rejected parameters: {}", e);
            GuardError::from(e)
        })
    }

    /// Check that `path` derives under `coin`.
    pub fn validate_coin_path(&self, coin: Option<&CoinDescriptor>, path: &[u32]) -> Result<()> {
        validate_coin_path(coin, path).map_err(|e| {
            tracing::debug!(
                slip44 = coin.map(|c| c.slip44),
                coin_type_segment = path.get(1),
                "Rejected path: {}",
                e
            );
            GuardError::from(e)
        })
    }

    /// Firmware range for calling `method` with `coin`, against the current
    /// configuration snapshot.
    pub fn firmware_range(
        &self,
        method: &str,
        coin: Option<&CoinDescriptor>,
        base: &FirmwareRange,
    ) -> FirmwareRange {
        let config = self.provider.snapshot();
        let range = resolve_firmware_range(method, coin, base, config.overrides());
        tracing::debug!(
            method,
            coin = coin.map(|c| c.shortcut.as_str()),
            gen_one_min = %range.gen_one.min,
            gen_one_max = %range.gen_one.max,
            gen_two_min = %range.gen_two.min,
            gen_two_max = %range.gen_two.max,
            "Resolved firmware range"
        );
        range
    }

    /// Run every pre-flight check for `call` and return its firmware range.
    ///
    /// Order: parameter contract, then coin/path agreement (when a path is
    /// given), then range resolution. The first failure is returned.
    pub fn check(&self, call: &MethodCall) -> Result<FirmwareRange> {
        self.validate_params(&call.params, &call.fields)?;
        if let Some(path) = &call.path {
            self.validate_coin_path(call.coin.as_ref(), path)?;
        }
        Ok(self.firmware_range(&call.method, call.coin.as_ref(), &call.base))
    }
}
