//! File logging
//!
//! The terminal belongs to the UI, so log records only ever go to a file.
//! Without a configured file no logger is installed and `log` macros are
//! no-ops.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};

use crate::error::CmdhintError;

/// Build a logger that appends to `file`
///
/// `level` is an env_logger filter string; `RUST_LOG` overrides it.
pub fn file_logger(file: File, level: &str) -> Builder {
    let mut builder = Builder::new();
    builder
        .parse_filters(level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)));
    builder
}

/// Install the global logger writing to `path`
pub fn init_file_logger(path: &Path, level: &str) -> Result<(), CmdhintError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CmdhintError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    file_logger(file, level)
        .try_init()
        .map_err(|e| CmdhintError::Logger(e.to_string()))?;

    log::info!("cmdhint {} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
