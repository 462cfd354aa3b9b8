//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SuggestOrdering};

#[derive(Debug, Parser)]
#[command(
    name = "cmdhint",
    version,
    about = "Turn plain-language requests into shell command suggestions",
    long_about = "Interactive console that asks a suggestion service for ranked shell \
                  commands matching a request, and runs the chosen one through the \
                  same service."
)]
pub struct Cli {
    /// Base URL of the suggestion service (overrides [server] base_url).
    #[arg(long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Config file to load instead of ~/.config/cmdhint/config.toml.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How overlapping suggest responses are resolved.
    #[arg(long = "ordering", value_enum)]
    pub ordering: Option<SuggestOrdering>,

    /// Write logs to a file (overrides [logging] file).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long = "print-config")]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(ordering) = self.ordering {
            config.suggest.ordering = ordering;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
