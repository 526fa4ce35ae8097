//! Review service boundary and LLM integration.
//!
//! The orchestrator only sees [`ReviewService`]; `rig` holds the rig-core
//! backed implementation so the rest of the crate never touches the LLM
//! library directly.

pub mod rig;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the review service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The transport or API call failed. The message is shown to the user as-is.
    #[error("{0}")]
    Api(String),

    #[error("received an empty or invalid response from the AI assistant")]
    EmptyResponse,

    #[error("review service not configured: {0}")]
    NotConfigured(String),
}

/// Something that can review a piece of source code.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Review `source_text` and return a markdown report.
    async fn review_code(&self, source_text: &str) -> Result<String, ServiceError>;
}

/// Fixed review instructions. `{code}` is replaced with the file contents.
pub const REVIEW_PROMPT_TEMPLATE: &str = "\
You are an expert code reviewer. Analyze the following code for readability, modularity, performance, best practices, and potential bugs.
Provide a comprehensive review with clear, actionable suggestions for improvement.
Structure your response in Markdown format. Use headings for different sections (e.g., ## Readability, ## Best Practices).
Use code blocks for examples of improved code.

Here is the code to review:
---
```
{code}
```
---
";

/// Build the full prompt for one review call.
pub fn build_review_prompt(source_text: &str) -> String {
    REVIEW_PROMPT_TEMPLATE.replacen("{code}", source_text, 1)
}

/// Reject blank completions so an empty report never counts as success.
pub fn require_report(response: String) -> Result<String, ServiceError> {
    if response.trim().is_empty() {
        Err(ServiceError::EmptyResponse)
    } else {
        Ok(response)
    }
}
