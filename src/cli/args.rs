//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use codecritic::intake::browse::DEFAULT_BROWSE_DEPTH;
use codecritic::models::{ProviderName, ReviewResult};

/// AI code review for a single source file.
#[derive(Parser, Debug)]
#[command(
    name = "codecritic",
    version = codecritic::constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// LLM provider (overrides config and CODECRITIC_PROVIDER).
    #[arg(long, global = true)]
    pub provider: Option<ProviderName>,

    /// Model identifier (overrides config and CODECRITIC_MODEL).
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Defaults to `session` in the current directory.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Start an interactive review session.
    Session(SessionArgs),

    /// Review one file and print the report.
    Review(ReviewArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `session` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {
    /// Directory listed by the browse dialog.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// How deep the browse dialog descends into subdirectories.
    #[arg(long, default_value_t = DEFAULT_BROWSE_DEPTH)]
    pub depth: usize,

    /// Disable the loading spinner.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            depth: DEFAULT_BROWSE_DEPTH,
            no_progress: false,
        }
    }
}

/// Arguments for the `review` subcommand.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Source file to review.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Disable the loading spinner.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

/// Output format for one-shot reviews.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Render a review using the renderer for this format.
    pub fn render(&self, review: &ReviewResult) -> String {
        use codecritic::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => codecritic::output::terminal::TerminalRenderer.render(review),
            OutputFormat::Json => codecritic::output::json::JsonRenderer.render(review),
            OutputFormat::Markdown => codecritic::output::markdown::MarkdownRenderer.render(review),
        }
    }
}
