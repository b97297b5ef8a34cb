//! Work-log report CLI library.
//!
//! This crate provides the CLI interface for the work-log reporter.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
