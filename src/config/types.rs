// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROMPT: &str = "PS C:\\Users\\You>";

/// How overlapping suggestion fetches are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestOrdering {
    /// Only the most recently issued fetch may replace the list
    #[default]
    LatestIssued,
    /// Whichever fetch completes last wins, even if it was issued earlier
    LastCompleted,
}

/// Remote service section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Suggestion behaviour section
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SuggestConfig {
    #[serde(default)]
    pub ordering: SuggestOrdering,
}

/// Display section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Prefix shown before echoed commands
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the key help lines at startup
    #[serde(default = "default_true")]
    pub greeting: bool,
    /// Interpret ANSI color codes in command output
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            prompt: default_prompt(),
            greeting: true,
            ansi_colors: true,
        }
    }
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

/// Logging section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// env_logger filter string, e.g. "debug" or "cmdhint=trace"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; logging is off when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
