//! CLI command implementations.

pub mod config;
pub mod init;
pub mod last;
pub mod locate;

use std::path::{Path, PathBuf};

use geofix::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Resolve the configuration file path: explicit flag or platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Load the configuration the command should run with.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(&resolve_config_path(explicit))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.ini");
        assert_eq!(resolve_config_path(Some(&explicit)), explicit);
    }

    #[test]
    fn test_resolve_config_path_falls_back_to_default() {
        assert_eq!(resolve_config_path(None), config_file_path());
    }

    #[test]
    fn test_load_config_missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, ConfigFile::default());
    }
}
