//! rig-core integration for the review service.
//!
//! Uses rig-core's provider clients and Agent abstraction. Gemini is the
//! default backend; Anthropic, OpenAI, Cohere, Perplexity, DeepSeek, xAI,
//! Groq and any OpenAI-compatible API are selectable through config.
//!
//! One completion call per review. No timeout and no retry: the first
//! failure is returned to the caller.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers;

use crate::config::ProviderConfig;
use crate::models::ProviderName;

use super::{ReviewService, ServiceError, build_review_prompt, require_report};

/// Maximum tokens per completion response.
///
/// Reports are long-form markdown and thinking models (e.g. Gemini 2.5)
/// spend part of this budget on reasoning tokens.
const MAX_TOKENS: u64 = 65536;

/// Build a single-turn agent from a rig-core client and prompt it.
macro_rules! prompt_report {
    ($client:expr, $model:expr, $prompt:expr, $label:expr) => {{
        let agent = $client
            .agent($model)
            .temperature(0.2)
            .max_tokens(MAX_TOKENS)
            .build();
        agent
            .prompt($prompt)
            .await
            .map_err(|e| ServiceError::Api(format!("{} API error: {e}", $label)))
    }};
}

/// Create a rig-core client using the `Client::new(api_key)` convention.
macro_rules! new_client {
    ($provider_mod:path, $api_key:expr, $label:expr) => {{
        <$provider_mod>::new($api_key).map_err(|e| {
            ServiceError::Api(format!("failed to create {} client: {e}", $label))
        })
    }};
}

/// rig-core based review service.
pub struct RigProvider {
    config: ProviderConfig,
}

impl std::fmt::Debug for RigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RigProvider")
            .field("config", &self.config)
            .finish()
    }
}

impl RigProvider {
    /// Create a provider. Fails when no API key was configured, so the
    /// application refuses to start instead of failing on the first call.
    pub fn new(config: ProviderConfig) -> Result<Self, ServiceError> {
        if config.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Err(ServiceError::NotConfigured(format!(
                "no API key found for provider '{}'. Set {}, {} or {}.",
                config.name,
                crate::constants::ENV_API_KEY,
                crate::constants::ENV_API_KEY_FALLBACK,
                config.name.api_key_env_var(),
            )));
        }
        if config.name == ProviderName::OpenAICompatible && config.base_url.is_none() {
            return Err(ServiceError::NotConfigured(
                "openai-compatible provider requires base_url to be set".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn api_key(&self) -> Result<&str, ServiceError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::NotConfigured("missing API key".to_string()))
    }

    /// Build an OpenAI-style client, optionally with a custom base URL.
    fn build_openai_client(
        &self,
        api_key: &str,
    ) -> Result<providers::openai::CompletionsClient, ServiceError> {
        let mut builder = providers::openai::CompletionsClient::builder().api_key(api_key);
        if let Some(ref base_url) = self.config.base_url {
            builder = builder.base_url(base_url);
        }
        builder
            .build()
            .map_err(|e| ServiceError::Api(format!("failed to create OpenAI client: {e}")))
    }

    /// Send the prompt to the configured backend and return the raw text.
    async fn call_rig(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key()?;
        let model = self.config.model.as_str();

        match self.config.name {
            ProviderName::Gemini => {
                let client = new_client!(providers::gemini::Client, api_key, "Gemini")?;
                prompt_report!(client, model, prompt, "Gemini")
            }
            ProviderName::Anthropic => {
                let client: providers::anthropic::Client = providers::anthropic::Client::builder()
                    .api_key(api_key)
                    .build()
                    .map_err(|e| {
                        ServiceError::Api(format!("failed to create Anthropic client: {e}"))
                    })?;
                prompt_report!(client, model, prompt, "Anthropic")
            }
            ProviderName::OpenAI => {
                let client = self.build_openai_client(api_key)?;
                prompt_report!(client, model, prompt, "OpenAI")
            }
            ProviderName::OpenAICompatible => {
                let client = self.build_openai_client(api_key)?;
                prompt_report!(client, model, prompt, "OpenAI-compatible")
            }
            ProviderName::Cohere => {
                let client = new_client!(providers::cohere::Client, api_key, "Cohere")?;
                prompt_report!(client, model, prompt, "Cohere")
            }
            ProviderName::Perplexity => {
                let client = new_client!(providers::perplexity::Client, api_key, "Perplexity")?;
                prompt_report!(client, model, prompt, "Perplexity")
            }
            ProviderName::DeepSeek => {
                let client = new_client!(providers::deepseek::Client, api_key, "DeepSeek")?;
                prompt_report!(client, model, prompt, "DeepSeek")
            }
            ProviderName::XAI => {
                let client = new_client!(providers::xai::Client, api_key, "xAI")?;
                prompt_report!(client, model, prompt, "xAI")
            }
            ProviderName::Groq => {
                let client = new_client!(providers::groq::Client, api_key, "Groq")?;
                prompt_report!(client, model, prompt, "Groq")
            }
        }
    }
}

#[async_trait]
impl ReviewService for RigProvider {
    async fn review_code(&self, source_text: &str) -> Result<String, ServiceError> {
        let prompt = build_review_prompt(source_text);
        tracing::debug!(
            provider = %self.config.name,
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending review request"
        );

        let response = self.call_rig(&prompt).await.inspect_err(|e| {
            tracing::debug!(provider = %self.config.name, error = %e, "review request failed");
        })?;

        require_report(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: ProviderName, api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            name,
            model: name.default_model().to_string(),
            base_url: None,
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn new_provider_missing_api_key() {
        let err = RigProvider::new(config(ProviderName::Gemini, None)).unwrap_err();
        assert!(matches!(err, ServiceError::NotConfigured(_)));
        let msg = err.to_string();
        assert!(msg.contains("gemini"));
        assert!(msg.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn new_provider_blank_api_key() {
        let err = RigProvider::new(config(ProviderName::Gemini, Some("  "))).unwrap_err();
        assert!(matches!(err, ServiceError::NotConfigured(_)));
    }

    #[test]
    fn new_provider_with_api_key() {
        let provider = RigProvider::new(config(ProviderName::Gemini, Some("key"))).unwrap();
        assert_eq!(provider.model(), "gemini-2.5-flash");
    }

    #[test]
    fn openai_compatible_requires_base_url() {
        let err =
            RigProvider::new(config(ProviderName::OpenAICompatible, Some("key"))).unwrap_err();
        assert!(err.to_string().contains("base_url"));

        let mut with_url = config(ProviderName::OpenAICompatible, Some("key"));
        with_url.base_url = Some("http://localhost:11434/v1".into());
        assert!(RigProvider::new(with_url).is_ok());
    }

    #[test]
    fn debug_output_redacts_key() {
        let provider = RigProvider::new(config(ProviderName::Groq, Some("sk-secret"))).unwrap();
        let debug = format!("{provider:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
