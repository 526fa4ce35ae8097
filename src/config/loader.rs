//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.codecritic.toml` in the working directory
//! 4. `~/.config/codecritic/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::ProviderName;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub display: DisplayConfig,
}

/// LLM provider configuration.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    pub name: ProviderName,
    /// Model identifier. Empty means the provider's default model.
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ProviderConfig {
    /// Select `name`. A model chosen for a different provider no longer
    /// applies and is dropped.
    fn switch_to(&mut self, name: ProviderName) {
        if name != self.name {
            self.model.clear();
        }
        self.name = name;
    }

    /// Set the model unless `model` is blank.
    fn set_model(&mut self, model: &str) {
        if !model.trim().is_empty() {
            self.model = model.to_string();
        }
    }

    /// Fill in the provider's default model when none was chosen.
    fn resolve_model(&mut self) {
        if self.model.trim().is_empty() {
            self.model = self.name.default_model().to_string();
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Colored terminal output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One config file as written: unset keys stay `None` so they never
/// override a lower layer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    provider: ProviderFile,
    display: DisplayFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderFile {
    name: Option<ProviderName>,
    model: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DisplayFile {
    color: Option<bool>,
}

/// Values given on the command line; they beat every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub provider: Option<ProviderName>,
    pub model: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then the one in `workdir`, then applies
    /// environment and CLI overrides. The API key and model are resolved
    /// last so a provider switch picks up that provider's key variable and
    /// default model.
    pub fn load(
        workdir: Option<&Path>,
        env: &Env,
        cli: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), workdir, env, cli)
    }

    fn load_layers(
        global_path: Option<&Path>,
        workdir: Option<&Path>,
        env: &Env,
        cli: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = global_path.filter(|p| p.exists()) {
            config.merge(Self::load_file(path)?);
            tracing::debug!(path = %path.display(), "loaded global config");
        }

        if let Some(dir) = workdir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
                tracing::debug!(path = %local_path.display(), "loaded local config");
            }
        }

        config.apply_env_vars(env);
        if let Some(name) = cli.provider {
            config.provider.switch_to(name);
        }
        if let Some(model) = cli.model.as_deref() {
            config.provider.set_model(model);
        }
        config.resolve_api_key(env);
        config.provider.resolve_model();

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this one; every key the file sets wins.
    fn merge(&mut self, other: ConfigFile) {
        if let Some(name) = other.provider.name {
            self.provider.switch_to(name);
        }
        if let Some(model) = other.provider.model.as_deref() {
            self.provider.set_model(model);
        }
        if other.provider.base_url.is_some() {
            self.provider.base_url = other.provider.base_url;
        }
        if other.provider.api_key.is_some() {
            self.provider.api_key = other.provider.api_key;
        }
        if let Some(color) = other.display.color {
            self.display.color = color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_PROVIDER) {
            match val.parse::<ProviderName>() {
                Ok(name) => self.provider.switch_to(name),
                Err(_) => tracing::warn!(
                    "ignoring invalid {} value: {val}",
                    constants::ENV_PROVIDER
                ),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_MODEL) {
            self.provider.set_model(&val);
        }
        if let Some(val) = env.non_empty(constants::ENV_BASE_URL) {
            self.provider.base_url = Some(val);
        }

        // https://no-color.org
        if env.non_empty("NO_COLOR").is_some() {
            self.display.color = false;
        }
    }

    /// Environment credentials beat the config file's `api_key`.
    fn resolve_api_key(&mut self, env: &Env) {
        let api_key = env
            .non_empty(constants::ENV_API_KEY)
            .or_else(|| env.non_empty(constants::ENV_API_KEY_FALLBACK))
            .or_else(|| env.non_empty(self.provider.name.api_key_env_var()));
        if api_key.is_some() {
            self.provider.api_key = api_key;
        }
    }
}
