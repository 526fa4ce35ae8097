//! codecritic: AI code review for a single source file.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use codecritic::config::{CliOverrides, Config};
use codecritic::constants;
use codecritic::env::Env;
use codecritic::intake::DiskFile;
use codecritic::logging;
use codecritic::models::InteractionState;
use codecritic::orchestrator::ReviewSession;
use codecritic::providers::rig::RigProvider;
use codecritic::shell::{self, ShellOptions};

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, ReviewArgs, SessionArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(&env, cli.verbose, !cli.no_color && io::stderr().is_terminal());

    let command = cli
        .command
        .unwrap_or_else(|| Command::Session(SessionArgs::default()));
    if matches!(command, Command::Version) {
        return run_version();
    }

    let overrides = CliOverrides {
        provider: cli.provider,
        model: cli.model,
    };
    let config = Config::load(Some(Path::new(".")), &env, &overrides)
        .context("failed to load configuration")?;
    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration loaded");

    // Refuse to start without credentials.
    let provider = RigProvider::new(config.provider.clone())?;
    tracing::info!(provider = %config.provider.name, model = provider.model(), "provider ready");
    let session = ReviewSession::new(Arc::new(provider));

    match command {
        Command::Session(args) => run_session(&session, args).await,
        Command::Review(args) => run_review(&session, args).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Interactive session on stdin/stdout.
async fn run_session(session: &ReviewSession, args: SessionArgs) -> Result<()> {
    if !args.dir.is_dir() {
        bail!("--dir is not a directory: {}", args.dir.display());
    }
    let opts = ShellOptions {
        dir: args.dir,
        browse_depth: args.depth,
        progress: !args.no_progress && io::stderr().is_terminal(),
    };

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    shell::run(session, input, &mut out, &opts)
        .await
        .context("interactive session failed")?;
    println!();
    Ok(())
}

/// One-shot review of a single file.
async fn run_review(session: &ReviewSession, args: ReviewArgs) -> Result<()> {
    let file = DiskFile::new(&args.file);
    let progress = !args.no_progress && io::stderr().is_terminal();

    // Loading text goes to stderr so stdout carries only the report.
    let state = shell::review_with_spinner(session, &file, &mut io::stderr(), progress)
        .await
        .context("failed to write progress output")?;

    match state {
        InteractionState::Success(review) => {
            print!("{}", args.format.render(&review));
            Ok(())
        }
        InteractionState::Failed { message } => bail!("{message}"),
        other => bail!("review ended in unexpected state: {}", other.label()),
    }
}
