//! cmdhint: a terminal console that asks a suggestion service for shell
//! commands matching a plain-language request and runs the chosen one.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod gesture;
pub mod keybindings;
pub mod logging;
pub mod output;
pub mod session;
pub mod suggestion;

#[cfg(test)]
mod test_utils;
