//! Last command - show the last persisted fix.

use std::path::{Path, PathBuf};

use clap::Args;

use geofix::app::GeofixApp;

use crate::commands::load_config;
use crate::error::CliError;

/// Arguments for the last command.
#[derive(Debug, Args)]
pub struct LastArgs {
    /// Read from this store directory instead of the configured one
    #[arg(long, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,
}

/// Run the last command.
pub fn run(args: LastArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let directory = match args.store_dir {
        Some(dir) => dir,
        None => load_config(config_path)?.store.directory,
    };

    match GeofixApp::read_last_persisted(&directory)? {
        Some(record) => {
            println!("{}", record.title);
            println!("  Position: {:.6}, {:.6}", record.latitude, record.longitude);
            println!(
                "  Span:     {:.4}×{:.4}",
                record.latitude_delta, record.longitude_delta
            );
        }
        None => {
            println!("No fix has been persisted yet.");
            println!("Run 'geofix locate' to acquire one.");
        }
    }

    Ok(())
}
