//! Terminal renderer: the report as styled flowing text.

use colored::Colorize;

use crate::markdown;
use crate::models::{DisplayBlock, ReviewResult};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored headings and bullets.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, review: &ReviewResult) -> String {
        let mut output = String::new();

        let title = format!("Code Review for {}", review.file_name);
        output.push_str(&format!(
            "\n {} {} {}\n",
            "▤".blue().bold(),
            "Code Review for".bold(),
            review.file_name.bright_blue().bold()
        ));
        output.push_str(&format!(" {}\n\n", rule(title.chars().count() + 2).dimmed()));

        output.push_str(&render_blocks(&markdown::render(&review.report)));
        output
    }
}

/// Render display blocks, one output line per block (headings get a rule).
pub fn render_blocks(blocks: &[DisplayBlock]) -> String {
    let mut output = String::new();
    for block in blocks {
        match block {
            DisplayBlock::Heading { level: 2, text } => {
                output.push('\n');
                output.push_str(&format!(" {}\n", text.bright_blue().bold()));
                output.push_str(&format!(" {}\n", rule(text.chars().count()).dimmed()));
            }
            DisplayBlock::Heading { text, .. } => {
                output.push_str(&format!(" {}\n", text.bold()));
            }
            DisplayBlock::ListItem { text } => {
                output.push_str(&format!("   {} {text}\n", "•".cyan()));
            }
            DisplayBlock::Paragraph { text } => {
                output.push_str(&format!(" {text}\n"));
            }
        }
    }
    output
}

fn rule(width: usize) -> String {
    "─".repeat(width.max(3))
}
