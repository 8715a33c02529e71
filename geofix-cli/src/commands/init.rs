//! Init command - initialize configuration file.

use std::path::Path;

use dialoguer::Confirm;

use geofix::config::ConfigFile;

use crate::commands::resolve_config_path;
use crate::error::CliError;

/// Run the init command.
pub fn run(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Configuration file {} exists. Overwrite with defaults?",
                path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| CliError::Prompt(e.to_string()))?;
        if !overwrite {
            println!("Kept existing configuration.");
            return Ok(());
        }
    }

    ConfigFile::default().save_to(&path)?;

    println!("Configuration file: {}", path.display());
    println!();
    println!("Edit this file to customize geofix settings.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}
