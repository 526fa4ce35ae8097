//! Configuration loading and layering.
//!
//! Handles `.codecritic.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{CliOverrides, Config, ConfigError, DisplayConfig, ProviderConfig};
