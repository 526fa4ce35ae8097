//! JSON output renderer.
//!
//! Outputs `{"file_name": ..., "report": ..., "blocks": [...]}`.

use crate::markdown;
use crate::models::ReviewResult;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, review: &ReviewResult) -> String {
        let output = serde_json::json!({
            "file_name": review.file_name,
            "report": review.report,
            "blocks": markdown::render(&review.report),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
