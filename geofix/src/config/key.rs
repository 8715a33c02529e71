//! Typed configuration keys for get/set access from the CLI.

use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{ConfigError, ConfigFile};

/// A known configuration key in `section.key` form.
///
/// Gives the CLI `config get`/`config set` commands a closed, typed key
/// space instead of raw INI access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `location.latitude`
    LocationLatitude,
    /// `location.longitude`
    LocationLongitude,
    /// `location.allow`
    LocationAllow,
    /// `store.directory`
    StoreDirectory,
    /// `viewport.settle_delay_ms`
    ViewportSettleDelayMs,
}

impl ConfigKey {
    /// All keys, grouped by section in display order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::LocationLatitude,
            ConfigKey::LocationLongitude,
            ConfigKey::LocationAllow,
            ConfigKey::StoreDirectory,
            ConfigKey::ViewportSettleDelayMs,
        ]
    }

    /// The section this key lives in.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::LocationLatitude
            | ConfigKey::LocationLongitude
            | ConfigKey::LocationAllow => "location",
            ConfigKey::StoreDirectory => "store",
            ConfigKey::ViewportSettleDelayMs => "viewport",
        }
    }

    /// The key name within its section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::LocationLatitude => "latitude",
            ConfigKey::LocationLongitude => "longitude",
            ConfigKey::LocationAllow => "allow",
            ConfigKey::StoreDirectory => "directory",
            ConfigKey::ViewportSettleDelayMs => "settle_delay_ms",
        }
    }

    /// The full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Read this key's current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::LocationLatitude => config.location.latitude.to_string(),
            ConfigKey::LocationLongitude => config.location.longitude.to_string(),
            ConfigKey::LocationAllow => config.location.allow.to_string(),
            ConfigKey::StoreDirectory => config.store.directory.display().to_string(),
            ConfigKey::ViewportSettleDelayMs => config.viewport.settle_delay_ms.to_string(),
        }
    }

    /// Parse and apply a new value for this key.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            section: self.section().to_string(),
            key: self.key_name().to_string(),
            value: value.to_string(),
        };

        match self {
            ConfigKey::LocationLatitude => {
                config.location.latitude = value.trim().parse().map_err(|_| invalid())?;
            }
            ConfigKey::LocationLongitude => {
                config.location.longitude = value.trim().parse().map_err(|_| invalid())?;
            }
            ConfigKey::LocationAllow => {
                config.location.allow = value.trim().parse().map_err(|_| invalid())?;
            }
            ConfigKey::StoreDirectory => {
                config.store.directory = PathBuf::from(value);
            }
            ConfigKey::ViewportSettleDelayMs => {
                config.viewport.settle_delay_ms = value.trim().parse().map_err(|_| invalid())?;
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location.latitude" => Ok(ConfigKey::LocationLatitude),
            "location.longitude" => Ok(ConfigKey::LocationLongitude),
            "location.allow" => Ok(ConfigKey::LocationAllow),
            "store.directory" => Ok(ConfigKey::StoreDirectory),
            "viewport.settle_delay_ms" => Ok(ConfigKey::ViewportSettleDelayMs),
            _ => Err(()),
        }
    }
}
