//! Gantry Core - Shared configuration and error types
//!
//! This crate provides the configuration model, config file discovery and
//! the error taxonomy used by the rest of the Gantry crates.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, GitHubConfig};
pub use error::{CodecError, ConfigError, GantryError, Result};
