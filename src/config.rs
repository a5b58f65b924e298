// Configuration module for toaster
// This module handles loading and parsing configuration from ~/.config/toaster/config.toml

mod types;

pub use types::{Config, ToastConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToasterError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/toaster/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_or_default(&get_config_path())
}

/// Loads configuration from `path`, falling back to defaults with a warning
pub fn load_config_or_default(path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    // If file doesn't exist, return defaults silently
    if !path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match load_config_from(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to load config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Reads, parses and validates the config file at `path`
pub fn load_config_from(path: &Path) -> Result<Config, ToasterError> {
    let contents = fs::read_to_string(path).map_err(|source| ToasterError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    let config: Config = toml::from_str(&contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ToasterError> {
    if config.toast.limit == 0 {
        return Err(ToasterError::InvalidConfig(
            "toast.limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/toaster/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("toaster")
        .join("config.toml")
}
