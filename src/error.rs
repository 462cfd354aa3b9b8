use std::path::PathBuf;

use thiserror::Error;

use crate::gateway::GatewayError;

/// Startup errors for cmdhint
#[derive(Debug, Error)]
pub enum CmdhintError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already initialized: {0}")]
    Logger(String),

    #[error("Cannot create HTTP client: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
