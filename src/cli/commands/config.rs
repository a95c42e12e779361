//! Config file commands.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::BarcusError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the home directory cannot be found, the config file
/// cannot be written, or output formatting fails.
pub fn config(
    cmd: ConfigCommands,
    current: &Config,
    format: OutputFormat,
) -> Result<String, BarcusError> {
    match cmd {
        ConfigCommands::Init { force } => init(&Paths::new()?, force),
        ConfigCommands::Show => show(current, format),
        ConfigCommands::Path => Ok(Paths::new()?.config_file.display().to_string()),
    }
}

fn init(paths: &Paths, force: bool) -> Result<String, BarcusError> {
    if paths.config_file.exists() && !force {
        return Err(BarcusError::Config(format!(
            "Config file already exists at {} (use --force to overwrite)",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    Ok(format!("Wrote default config to {}", paths.config_file.display()))
}

fn show(current: &Config, format: OutputFormat) -> Result<String, BarcusError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(current)?),
        OutputFormat::Pretty => serde_yaml::to_string(current)
            .map_err(|e| BarcusError::Config(format!("Failed to serialize config: {e}"))),
    }
}
