//! Raw markdown output: the report exactly as the service returned it.

use crate::models::ReviewResult;
use crate::output::OutputRenderer;

pub struct MarkdownRenderer;

impl OutputRenderer for MarkdownRenderer {
    fn render(&self, review: &ReviewResult) -> String {
        let mut output = review.report.clone();
        if !output.ends_with('\n') {
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_passed_through_with_trailing_newline() {
        let review = ReviewResult {
            file_name: "a.rs".into(),
            report: "## Title\n```\ncode\n```".into(),
        };
        assert_eq!(MarkdownRenderer.render(&review), "## Title\n```\ncode\n```\n");
    }
}
