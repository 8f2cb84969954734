use std::path::Path;

use serde::Deserialize;

use crate::utils::get_config_dir;
use log::debug;

/// Represents the main application configuration structure.
///
/// Holds default output settings for the formatter.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default output settings.
///
/// Both fields are optional; a flag on the command line always wins
/// over the configured default.
#[derive(Deserialize, Debug, Default)]
pub struct OutputConfig {
    pub concise: Option<bool>,
    pub accuracy: Option<usize>,
}

/// Loads the application configuration from a `config.toml` file.
///
/// The configuration file is expected to be located in the platform-specific
/// configuration directory retrieved via `get_config_dir()`.
/// If the configuration file is not found at the expected path, a default
/// `Config` instance is returned.
///
/// # Errors
/// - `Err(Box<dyn std::error::Error>)`: An error occurred during file reading or TOML parsing.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    load_config_from(&get_config_dir().join("config.toml"))
}

/// Loads configuration from an explicit path.
///
/// Returns a default `Config` if no file exists at `config_path`.
///
/// # Errors
/// - `Err(Box<dyn std::error::Error>)`: An error occurred during file reading or TOML parsing.
pub fn load_config_from(config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    if !config_path.exists() {
        debug!("Could not find config at supported paths, using default config.");
        return Ok(Config::default());
    }

    debug!("loading config from {}", config_path.display());
    let config_str = std::fs::read_to_string(config_path)?;

    // Parse the TOML string
    let config: Config = toml::from_str(&config_str)?;

    Ok(config)
}
