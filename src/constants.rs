//! App-wide constants.
//!
//! Tool name, config paths and environment variable names in one place.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "codecritic";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by build.rs).
pub const TARGET: &str = env!("TARGET");

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".codecritic.toml";

/// Directory name under the platform config dir for global config.
pub const CONFIG_DIR: &str = "codecritic";

/// Shown when a failed cycle carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unknown error occurred. Please check the logs.";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PROVIDER: &str = "CODECRITIC_PROVIDER";
pub const ENV_MODEL: &str = "CODECRITIC_MODEL";
pub const ENV_API_KEY: &str = "CODECRITIC_API_KEY";
/// Generic credential variable, checked after [`ENV_API_KEY`].
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_BASE_URL: &str = "CODECRITIC_BASE_URL";
pub const ENV_LOG: &str = "CODECRITIC_LOG";
