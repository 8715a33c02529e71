//! Config file structure, defaults, and INI (de)serialization.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A key holds a value of the wrong type.
    #[error("Invalid value for {section}.{key}: '{value}'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Path of the configuration file: `<config dir>/geofix/config.ini`.
///
/// Falls back to the current directory when the platform reports no config
/// directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geofix")
        .join("config.ini")
}

/// Default directory for the durable store:
/// `<data dir>/geofix`.
fn default_store_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geofix")
}

/// `[location]` section: the fixed position source and permission toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSection {
    /// Latitude the fixed position source reports.
    pub latitude: f64,
    /// Longitude the fixed position source reports.
    pub longitude: f64,
    /// Whether the foreground permission request resolves to granted.
    pub allow: bool,
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            allow: true,
        }
    }
}

/// `[store]` section: durable storage location.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSection {
    /// Directory the disk store writes into.
    pub directory: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            directory: default_store_directory(),
        }
    }
}

/// `[viewport]` section: viewport controller tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSection {
    /// Settle delay after a recenter, in milliseconds.
    pub settle_delay_ms: u64,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            settle_delay_ms: 2000,
        }
    }
}

/// The loaded configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// `[location]` section.
    pub location: LocationSection,
    /// `[store]` section.
    pub store: StoreSection,
    /// `[viewport]` section.
    pub viewport: ViewportSection,
}

impl ConfigFile {
    /// Load the configuration from the default path.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(p) => ConfigError::Parse(p.to_string()),
        })?;

        let mut config = Self::default();

        if let Some(section) = ini.section(Some("location")) {
            if let Some(value) = section.get("latitude") {
                config.location.latitude = parse_value("location", "latitude", value)?;
            }
            if let Some(value) = section.get("longitude") {
                config.location.longitude = parse_value("location", "longitude", value)?;
            }
            if let Some(value) = section.get("allow") {
                config.location.allow = parse_value("location", "allow", value)?;
            }
        }

        if let Some(section) = ini.section(Some("store")) {
            if let Some(value) = section.get("directory") {
                config.store.directory = PathBuf::from(value);
            }
        }

        if let Some(section) = ini.section(Some("viewport")) {
            if let Some(value) = section.get("settle_delay_ms") {
                config.viewport.settle_delay_ms =
                    parse_value("viewport", "settle_delay_ms", value)?;
            }
        }

        Ok(config)
    }

    /// Save the configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("location"))
            .set("latitude", self.location.latitude.to_string())
            .set("longitude", self.location.longitude.to_string())
            .set("allow", self.location.allow.to_string());
        ini.with_section(Some("store"))
            .set("directory", self.store.directory.display().to_string());
        ini.with_section(Some("viewport"))
            .set(
                "settle_delay_ms",
                self.viewport.settle_delay_ms.to_string(),
            );
        ini.write_to_file(path)?;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(
    section: &str,
    key: &str,
    value: &str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("config.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.location.latitude, 0.0);
        assert_eq!(config.location.longitude, 0.0);
        assert!(config.location.allow);
        assert_eq!(config.viewport.settle_delay_ms, 2000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.location.latitude = 37.7749;
        config.location.longitude = -122.4194;
        config.location.allow = false;
        config.store.directory = PathBuf::from("/tmp/geofix-store");
        config.viewport.settle_delay_ms = 500;

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[location]\nlatitude = 51.5\n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.location.latitude, 51.5);
        assert_eq!(config.location.longitude, 0.0);
        assert!(config.location.allow);
        assert_eq!(config.viewport.settle_delay_ms, 2000);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[location]\nlatitude = north\n").unwrap();

        let result = ConfigFile::load_from(&path);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_config_file_path_ends_with_expected_suffix() {
        let path = config_file_path();
        assert!(path.ends_with(Path::new("geofix").join("config.ini")));
    }
}
