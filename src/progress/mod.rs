//! Loading indicator for terminal output.
//!
//! A single spinner line on stderr, redrawn in place while a review cycle
//! is in flight and cleared when it settles. Silent when disabled
//! (non-interactive stderr or `--no-progress`).

use std::io::{self, Write};

use colored::Colorize;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated one-line progress indicator.
pub struct Spinner {
    label: String,
    frame: usize,
    /// Whether a line is currently drawn.
    drawn: bool,
    /// If false, all output is suppressed.
    enabled: bool,
}

impl Spinner {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            frame: 0,
            drawn: false,
            enabled,
        }
    }

    /// Advance one frame and redraw.
    pub fn tick(&mut self) {
        let frame = FRAMES[self.frame % FRAMES.len()];
        self.frame = self.frame.wrapping_add(1);
        if !self.enabled {
            return;
        }

        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = write!(
            handle,
            "\r\x1b[2K  {} {}",
            frame.cyan().bold(),
            self.label.dimmed()
        );
        let _ = handle.flush();
        self.drawn = true;
    }

    /// Erase the spinner line.
    pub fn finish(&mut self) {
        if !self.enabled || !self.drawn {
            return;
        }
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = write!(handle, "\r\x1b[2K");
        let _ = handle.flush();
        self.drawn = false;
    }

    /// Frames rendered so far.
    pub fn ticks(&self) -> usize {
        self.frame
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}
