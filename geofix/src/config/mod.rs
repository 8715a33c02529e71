//! Configuration file loading and saving.
//!
//! Geofix reads an INI file with three sections:
//!
//! ```ini
//! [location]
//! latitude = 37.7749
//! longitude = -122.4194
//! allow = true
//!
//! [store]
//! directory = /home/user/.local/share/geofix
//!
//! [viewport]
//! settle_delay_ms = 2000
//! ```
//!
//! `[location]` configures the fixed position source the CLI stands in for
//! device GPS with, plus whether the (headless) permission request resolves
//! to granted. Missing files and missing keys fall back to defaults; CLI
//! arguments override config file values when specified.

mod file;
mod key;

pub use file::{
    config_file_path, ConfigError, ConfigFile, LocationSection, StoreSection, ViewportSection,
};
pub use key::ConfigKey;
