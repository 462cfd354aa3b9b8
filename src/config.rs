//! Configuration loading
//!
//! Reads `~/.config/cmdhint/config.toml`. A missing default file means
//! defaults; an unreadable or invalid default file also falls back to
//! defaults but reports a warning for the output log. An explicitly requested
//! file must load or startup fails.

use std::fs;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, DisplayConfig, LoggingConfig, ServerConfig, SuggestConfig, SuggestOrdering};

use crate::error::CmdhintError;

const CONFIG_DIR: &str = "cmdhint";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface to the user, if any
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the default config file, falling back to defaults on any problem
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    load_default_from_path(&path)
}

fn load_default_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{}; using defaults", e)),
        },
    }
}

/// Load a config file that must exist and parse
pub fn load_config_from_path(path: &Path) -> Result<Config, CmdhintError> {
    let content = fs::read_to_string(path).map_err(|source| CmdhintError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|e| CmdhintError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
