//! Interactive session loop.
//!
//! Reads one line at a time. While idle, a line is either a dropped path
//! (terminals paste the path of a file dragged onto them) or a request for
//! the browse dialog. While a cycle is loading no input is read; only the
//! spinner runs. Once the cycle settles, Enter resets the session.
//!
//! A terminal reports a drag only once it is released, so a dropped line
//! is replayed to the [`DropZone`] as `Enter` immediately followed by
//! `Drop`. No hover ever reaches the zone here: `Over` is never sent and the
//! "release to drop" intake variant is not shown. The zone's full event
//! model stays in `intake::drop_zone` for front ends that do see hovers.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::intake::browse::{self, DEFAULT_BROWSE_DEPTH};
use crate::intake::paste::parse_dropped_paths;
use crate::intake::{DiskFile, DragEvent, DropZone, FileSource, is_allowed};
use crate::models::InteractionState;
use crate::orchestrator::ReviewSession;
use crate::output::screen;
use crate::progress::Spinner;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Settings for the interactive loop.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Directory listed by the browse dialog.
    pub dir: PathBuf,
    pub browse_depth: usize,
    /// Animate the spinner on stderr while loading.
    pub progress: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            browse_depth: DEFAULT_BROWSE_DEPTH,
            progress: false,
        }
    }
}

/// Input line that ends the session in any state.
fn is_quit(line: &str) -> bool {
    matches!(line.trim(), ":quit" | ":q" | ":exit")
}

/// Run the session until `:quit` or end of input.
pub async fn run<R, W>(
    session: &ReviewSession,
    input: R,
    out: &mut W,
    opts: &ShellOptions,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut zone = DropZone::new();

    write!(out, "{}", screen::header())?;

    loop {
        let state = session.state();
        write!(out, "{}", screen::present(&state, &zone))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_quit(&line) {
            break;
        }

        match state {
            InteractionState::Idle => {
                let trimmed = line.trim();
                let selected = if trimmed.is_empty() || trimmed == ":browse" {
                    pick_from_dialog(&zone, &mut lines, out, opts).await?
                } else {
                    drop_line(&mut zone, &line)
                };
                let Some(file) = selected else {
                    continue;
                };

                if !is_allowed(file.path()) {
                    tracing::debug!(
                        path = %file.path().display(),
                        "file extension is not on the source allow-list"
                    );
                }
                zone.set_disabled(true);
                review_with_spinner(session, &file, out, opts.progress).await?;
                zone.set_disabled(false);
            }
            InteractionState::Success(_) | InteractionState::Failed { .. } => session.reset(),
            InteractionState::Loading { .. } => {}
        }
    }

    Ok(())
}

/// Treat an input line as a drop gesture; the first path wins.
fn drop_line(zone: &mut DropZone, line: &str) -> Option<DiskFile> {
    let files: Vec<DiskFile> = parse_dropped_paths(line)
        .into_iter()
        .map(DiskFile::new)
        .collect();
    if files.len() > 1 {
        tracing::info!(count = files.len(), "multiple files dropped, reviewing the first");
    }
    zone.handle::<DiskFile>(DragEvent::Enter);
    let response = zone.handle(DragEvent::Drop(files));
    debug_assert!(response.default_prevented);
    response.selected
}

/// Show the browse dialog and read the user's pick.
async fn pick_from_dialog<R, W>(
    zone: &DropZone,
    lines: &mut Lines<R>,
    out: &mut W,
    opts: &ShellOptions,
) -> io::Result<Option<DiskFile>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(request) = zone.open_dialog() else {
        return Ok(None);
    };

    let entries = match browse::browse(&opts.dir, opts.browse_depth, request.accept) {
        Ok(entries) => entries,
        Err(e) => {
            writeln!(out, "  {}", e.to_string().red())?;
            return Ok(None);
        }
    };
    write!(out, "{}", screen::browse_listing(&entries))?;
    out.flush()?;
    if entries.is_empty() {
        return Ok(None);
    }

    let Some(choice) = lines.next_line().await? else {
        return Ok(None);
    };
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(None);
    }

    let picked: Vec<DiskFile> = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| entries.get(i))
        .map(|entry| vec![entry.file.clone()])
        .unwrap_or_default();
    if picked.is_empty() {
        writeln!(out, "  {}", format!("No file numbered '{choice}'.").yellow())?;
    }

    Ok(zone.select_from_dialog(picked))
}

/// Submit `file` and animate the spinner until the cycle settles.
pub async fn review_with_spinner<W: Write>(
    session: &ReviewSession,
    file: &dyn FileSource,
    out: &mut W,
    progress: bool,
) -> io::Result<InteractionState> {
    let label = screen::loading_line(file.name());
    if !progress {
        writeln!(out, "\n  {label}")?;
        out.flush()?;
    }

    let mut spinner = Spinner::new(label, progress);
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
    let cycle = session.submit(file);
    tokio::pin!(cycle);

    let outcome = loop {
        tokio::select! {
            outcome = &mut cycle => break outcome,
            _ = ticker.tick() => spinner.tick(),
        }
    };
    spinner.finish();

    Ok(outcome.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "submit rejected");
        session.state()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_commands() {
        assert!(is_quit(":quit"));
        assert!(is_quit("  :q \n"));
        assert!(!is_quit("quit.rs"));
    }

    #[test]
    fn drop_line_takes_first_path() {
        let mut zone = DropZone::new();
        let file = drop_line(&mut zone, "/tmp/a.rs /tmp/b.rs").unwrap();
        assert_eq!(file.name(), "a.rs");
        assert!(!zone.is_dragging());
    }

    #[test]
    fn drop_line_leaves_zone_idle_for_next_screen() {
        let mut zone = DropZone::new();
        drop_line(&mut zone, "/tmp/a.rs");
        let screen = screen::intake(&zone);
        assert!(screen.contains("Drag & drop a file here"));
        assert!(!screen.contains("Release to drop"));
    }

    #[test]
    fn drop_line_blank_selects_nothing() {
        let mut zone = DropZone::new();
        assert!(drop_line(&mut zone, "   ").is_none());
    }
}
