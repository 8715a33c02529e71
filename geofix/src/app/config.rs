//! Application configuration for GeofixApp.
//!
//! This module defines `AppConfig` which combines all configuration needed
//! to bootstrap the application: store location, device source settings,
//! and viewport tuning.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigFile;
use crate::viewport::ViewportConfig;

/// Durable store configuration for the application.
#[derive(Debug, Clone)]
pub struct StoreAppConfig {
    /// Directory the disk store writes into.
    pub directory: PathBuf,
}

/// Device source configuration for the application.
///
/// Headless hosts have no permission dialog or GPS hardware; these values
/// configure the static adapters standing in for them.
#[derive(Debug, Clone)]
pub struct LocationAppConfig {
    /// Latitude the position source reports.
    pub latitude: f64,
    /// Longitude the position source reports.
    pub longitude: f64,
    /// Whether the foreground permission request resolves to granted.
    pub allow: bool,
}

/// Application configuration combining all component configs.
///
/// This is the top-level configuration passed to `GeofixApp::start()`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Durable store configuration.
    pub store: StoreAppConfig,
    /// Device source configuration.
    pub location: LocationAppConfig,
    /// Viewport controller configuration.
    pub viewport: ViewportConfig,
}

impl AppConfig {
    /// Create an application config from a loaded configuration file.
    ///
    /// Keeps the file-to-component translation in one place rather than
    /// scattered in CLI code.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            store: StoreAppConfig {
                directory: config.store.directory.clone(),
            },
            location: LocationAppConfig {
                latitude: config.location.latitude,
                longitude: config.location.longitude,
                allow: config.location.allow,
            },
            viewport: ViewportConfig::default()
                .with_settle_delay(Duration::from_millis(config.viewport.settle_delay_ms)),
        }
    }

    /// Override the store directory.
    pub fn with_store_directory(mut self, directory: PathBuf) -> Self {
        self.store.directory = directory;
        self
    }

    /// Override the reported position.
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.location.latitude = latitude;
        self.location.longitude = longitude;
        self
    }

    /// Override whether permission is granted.
    pub fn with_allow(mut self, allow: bool) -> Self {
        self.location.allow = allow;
        self
    }
}
