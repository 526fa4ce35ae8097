//! Shared types used across all modules.
//!
//! Review-cycle state, rendered report blocks, and the provider selector
//! live here so the intake, orchestrator and output layers never reach
//! into each other's internals.

pub mod block;
pub mod review;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use block::DisplayBlock;
pub use review::{InteractionState, ReviewResult, SourceFile};

/// Supported LLM provider backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    #[default]
    Gemini,
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    Cohere,
    Perplexity,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "xai")]
    XAI,
    Groq,
    /// Any OpenAI-compatible API (e.g. Ollama, Together, local servers).
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderName::Gemini => "gemini",
            ProviderName::Anthropic => "anthropic",
            ProviderName::OpenAI => "openai",
            ProviderName::Cohere => "cohere",
            ProviderName::Perplexity => "perplexity",
            ProviderName::DeepSeek => "deepseek",
            ProviderName::XAI => "xai",
            ProviderName::Groq => "groq",
            ProviderName::OpenAICompatible => "openai-compatible",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderName::Gemini),
            "anthropic" => Ok(ProviderName::Anthropic),
            "openai" => Ok(ProviderName::OpenAI),
            "cohere" => Ok(ProviderName::Cohere),
            "perplexity" => Ok(ProviderName::Perplexity),
            "deepseek" => Ok(ProviderName::DeepSeek),
            "xai" => Ok(ProviderName::XAI),
            "groq" => Ok(ProviderName::Groq),
            "openai-compatible" => Ok(ProviderName::OpenAICompatible),
            other => Err(format!(
                "unsupported provider: '{other}'. Supported: gemini, anthropic, openai, \
                 cohere, perplexity, deepseek, xai, groq, openai-compatible"
            )),
        }
    }
}

impl ProviderName {
    /// Provider-specific environment variable consulted for the API key
    /// when neither `CODECRITIC_API_KEY` nor `API_KEY` is set.
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            ProviderName::Gemini => "GEMINI_API_KEY",
            ProviderName::Anthropic => "ANTHROPIC_API_KEY",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "OPENAI_API_KEY",
            ProviderName::Cohere => "COHERE_API_KEY",
            ProviderName::Perplexity => "PERPLEXITY_API_KEY",
            ProviderName::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderName::XAI => "XAI_API_KEY",
            ProviderName::Groq => "GROQ_API_KEY",
        }
    }

    /// Model used when neither config nor environment names one.
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderName::Gemini => "gemini-2.5-flash",
            ProviderName::Anthropic => "claude-sonnet-4-20250514",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "gpt-4o",
            ProviderName::Cohere => "command-r-plus",
            ProviderName::Perplexity => "sonar",
            ProviderName::DeepSeek => "deepseek-chat",
            ProviderName::XAI => "grok-3",
            ProviderName::Groq => "llama-3.3-70b-versatile",
        }
    }
}
