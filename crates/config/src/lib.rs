//! Configuration management for the Typesense toolkit.
//!
//! This crate provides types and loaders for resolving Typesense server and
//! cloud connection settings from environment variables and CLI overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, SettingsLoader, env_var_or_none};
pub use types::{CloudSettings, ServerSettings, Settings};
