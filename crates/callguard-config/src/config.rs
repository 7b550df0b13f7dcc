//! The configuration document.
//!
//! Only the `supportedFirmware` table is interpreted; other top-level keys
//! are ignored. Override entries are parsed one by one so that a single
//! malformed entry is dropped instead of rejecting the whole document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use callguard_core::OverrideEntry;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Immutable configuration snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawConfig")]
pub struct Config {
    /// Firmware overrides, in lookup order.
    pub supported_firmware: Vec<OverrideEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    supported_firmware: Vec<serde_json::Value>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let supported_firmware = raw
            .supported_firmware
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping malformed firmware override #{}: {}", index, e);
                    None
                }
            })
            .collect();
        Self { supported_firmware }
    }
}

impl Config {
    pub fn new(supported_firmware: Vec<OverrideEntry>) -> Self {
        Self { supported_firmware }
    }

    /// Parse a configuration document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a configuration document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Override entries, in lookup order.
    pub fn overrides(&self) -> &[OverrideEntry] {
        &self.supported_firmware
    }
}
