//! Locate command - acquire a fix and show the derived viewport.

use std::path::Path;
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use geofix::app::{AppConfig, GeofixApp};
use geofix::LocationState;

use crate::commands::load_config;
use crate::error::CliError;

/// How long to wait for the acquisition before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Arguments for the locate command.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Report this latitude instead of the configured one
    #[arg(long, requires = "longitude")]
    pub latitude: Option<f64>,

    /// Report this longitude instead of the configured one
    #[arg(long, requires = "latitude")]
    pub longitude: Option<f64>,

    /// Resolve the permission request as denied
    #[arg(long)]
    pub deny: bool,

    /// Apply this many zoom-in steps to the viewport before printing
    #[arg(long, value_name = "STEPS", default_value_t = 0)]
    pub zoom_in: u32,

    /// Apply this many zoom-out steps to the viewport before printing
    #[arg(long, value_name = "STEPS", default_value_t = 0)]
    pub zoom_out: u32,
}

/// Run the locate command.
pub fn run(args: LocateArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let app_config = build_app_config(&config, &args);

    println!("Geofix v{}", geofix::VERSION);
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("template is valid"),
    );
    spinner.set_message("Acquiring location fix...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let app = GeofixApp::start(app_config)?;
    let state = app.wait_for_fix(ACQUIRE_TIMEOUT);
    spinner.finish_and_clear();

    match state {
        LocationState::Available(coords) => {
            println!("Fix:      {}", coords);
            // Initialization runs right after publication; wait for it
            // before driving the viewport.
            let viewport = app.viewport();
            for _ in 0..200 {
                if viewport.region().is_some() {
                    break;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
            for _ in 0..args.zoom_in {
                viewport.zoom_in();
            }
            for _ in 0..args.zoom_out {
                viewport.zoom_out();
            }
            let snapshot = viewport.snapshot();
            println!("Marker:   {}", snapshot.tracked.map_or_else(
                || "(none)".to_string(),
                |c| c.to_string(),
            ));
            println!("Viewport: {}", snapshot.region);
        }
        LocationState::Failed(e) => {
            println!("Location unavailable: {}", e);
            println!("Viewport: {} (default)", app.viewport().snapshot().region);
        }
        LocationState::Pending => {
            println!("Timed out waiting for a location fix.");
        }
    }

    app.shutdown();
    Ok(())
}

/// Build the app config from file values and CLI overrides
/// (CLI > config > default).
fn build_app_config(config: &geofix::config::ConfigFile, args: &LocateArgs) -> AppConfig {
    let mut app_config = AppConfig::from_config_file(config);
    if let (Some(latitude), Some(longitude)) = (args.latitude, args.longitude) {
        app_config = app_config.with_position(latitude, longitude);
    }
    if args.deny {
        app_config = app_config.with_allow(false);
    }
    app_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofix::config::ConfigFile;

    fn args() -> LocateArgs {
        LocateArgs {
            latitude: None,
            longitude: None,
            deny: false,
            zoom_in: 0,
            zoom_out: 0,
        }
    }

    #[test]
    fn test_config_values_flow_through() {
        let mut file = ConfigFile::default();
        file.location.latitude = 48.8566;
        file.location.longitude = 2.3522;

        let app_config = build_app_config(&file, &args());
        assert_eq!(app_config.location.latitude, 48.8566);
        assert_eq!(app_config.location.longitude, 2.3522);
        assert!(app_config.location.allow);
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut file = ConfigFile::default();
        file.location.latitude = 48.8566;

        let mut cli_args = args();
        cli_args.latitude = Some(37.0);
        cli_args.longitude = Some(-122.0);
        cli_args.deny = true;

        let app_config = build_app_config(&file, &cli_args);
        assert_eq!(app_config.location.latitude, 37.0);
        assert_eq!(app_config.location.longitude, -122.0);
        assert!(!app_config.location.allow);
    }
}
