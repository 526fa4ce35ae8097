//! Session screen: what the interactive shell shows for each state.
//!
//! Everything here is a pure function of its inputs; the shell decides
//! when to print.

use colored::Colorize;

use crate::intake::DropZone;
use crate::intake::browse::BrowseEntry;
use crate::models::InteractionState;
use crate::output::OutputRenderer;
use crate::output::terminal::TerminalRenderer;

/// Application banner.
pub fn header() -> String {
    format!(
        "\n  {} {}\n    {}\n",
        "</>".bright_blue().bold(),
        "Code Review Assistant".bold(),
        "Automated code analysis".dimmed(),
    )
}

/// Screen for a session state.
///
/// `Idle` shows the intake area, `Loading` the progress line, `Failed` the
/// error with a retry hint, and `Success` the rendered report.
pub fn present(state: &InteractionState, zone: &DropZone) -> String {
    match state {
        InteractionState::Idle => intake(zone),
        InteractionState::Loading { file_name } => loading_line(file_name),
        InteractionState::Failed { message } => format!(
            "\n  {} {}\n\n  {}\n",
            "An error occurred:".red().bold(),
            message.red(),
            "Press Enter to try again.".dimmed(),
        ),
        InteractionState::Success(review) => format!(
            "{}\n  {}\n",
            TerminalRenderer.render(review),
            "Press Enter to review another file.".dimmed(),
        ),
    }
}

/// The intake area shown while idle.
pub fn intake(zone: &DropZone) -> String {
    let target = if zone.is_dragging() {
        "Release to drop the file".bright_blue().bold().to_string()
    } else {
        "Drag & drop a file here".bold().to_string()
    };
    let browse_hint = if zone.is_disabled() {
        String::new()
    } else {
        format!("    {}\n", "or press Enter (or type :browse) to select a file".dimmed())
    };
    format!(
        "\n  {}\n  {}\n\n    {}\n{}    {}\n",
        "Get Started".bold(),
        "Upload a source code file to begin the AI-powered review.".dimmed(),
        target,
        browse_hint,
        "(:quit to exit)".dimmed(),
    )
}

/// One-line loading message, also used as the spinner label.
pub fn loading_line(file_name: &str) -> String {
    format!("Our AI assistant is reviewing {file_name}...")
}

/// Numbered listing for the browse dialog.
pub fn browse_listing(entries: &[BrowseEntry]) -> String {
    if entries.is_empty() {
        return format!("  {}\n", "No source files found here.".yellow());
    }
    let width = entries.len().to_string().len();
    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "  {:>width$}  {}\n",
            (i + 1).to_string().cyan(),
            entry.display,
        ));
    }
    output.push_str(&format!("  {}\n", "Pick a number (Enter to cancel):".dimmed()));
    output
}
