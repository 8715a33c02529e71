//! Geofix CLI - Command-line interface
//!
//! This binary drives the geofix library from the command line, standing in
//! for the mobile rendering layer: it acquires a location fix, shows the
//! derived viewport, and manages the configuration file.

mod commands;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use geofix::log::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "geofix", version = geofix::VERSION, about = "Device location fixes and map viewport state")]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a location fix and show the derived viewport
    Locate(commands::locate::LocateArgs),

    /// Show the last persisted fix
    Last(commands::last::LastArgs),

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Initialize the configuration file
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "geofix=debug"
    } else {
        "geofix=warn"
    };
    let _guard = match init_logging(&LogConfig::default().with_filter(filter)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    tracing::debug!(version = geofix::VERSION, "geofix CLI starting");

    let result = match cli.command {
        Commands::Locate(args) => commands::locate::run(args, cli.config.as_deref()),
        Commands::Last(args) => commands::last::run(args, cli.config.as_deref()),
        Commands::Config { command } => commands::config::run(command, cli.config.as_deref()),
        Commands::Init => commands::init::run(cli.config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
