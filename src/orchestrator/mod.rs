//! Review session: the idle → loading → success/failed state machine.
//!
//! A session runs at most one review cycle at a time. The cycle reads the
//! selected file, sends its text to the [`ReviewService`], and settles into
//! `Success` or `Failed`. Both awaited steps share one error path, so a read
//! failure and a service failure are reported the same way.
//!
//! State lives in a `watch` channel so the presentation layer can follow
//! transitions while a cycle is in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::watch;
use uuid::Uuid;

use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::intake::FileSource;
use crate::models::{InteractionState, ReviewResult, SourceFile};
use crate::providers::{ReviewService, ServiceError};

/// Errors returned to callers of [`ReviewSession::submit`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("a review is already in progress")]
    ReviewInProgress,
}

/// Why a review cycle failed. Converted to a message, never propagated.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Owns the interaction state and drives review cycles.
pub struct ReviewSession {
    service: Arc<dyn ReviewService>,
    state: watch::Sender<InteractionState>,
    /// Bumped on every submit and reset; a finishing cycle only settles the
    /// state when its generation is still current.
    generation: AtomicU64,
}

impl ReviewSession {
    /// Create a session in the `Idle` state.
    pub fn new(service: Arc<dyn ReviewService>) -> Self {
        let (state, _) = watch::channel(InteractionState::Idle);
        Self {
            service,
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> InteractionState {
        self.state.borrow().clone()
    }

    /// Follow state transitions.
    pub fn subscribe(&self) -> watch::Receiver<InteractionState> {
        self.state.subscribe()
    }

    /// Run one review cycle for `file` and return the state it settled in.
    ///
    /// Clears any previous result or error and enters `Loading` before the
    /// first await. Rejected while another cycle is loading.
    pub async fn submit(&self, file: &dyn FileSource) -> Result<InteractionState, SessionError> {
        let generation = self.begin(file.name())?;
        let cycle_id = Uuid::new_v4();
        tracing::info!(cycle = %cycle_id, file = file.name(), "review cycle started");

        let next = match self.run_cycle(file).await {
            Ok(result) => {
                tracing::info!(
                    cycle = %cycle_id,
                    file = %result.file_name,
                    report_chars = result.report.len(),
                    "review cycle succeeded"
                );
                InteractionState::Success(result)
            }
            Err(err) => {
                tracing::error!(
                    cycle = %cycle_id,
                    file = file.name(),
                    error = %err,
                    "error during code review"
                );
                InteractionState::Failed {
                    message: failure_message(&err),
                }
            }
        };

        if !self.settle(generation, next) {
            tracing::debug!(cycle = %cycle_id, "cycle outcome discarded after reset");
        }
        Ok(self.state())
    }

    /// Return to `Idle`, dropping any held report or error. Idempotent.
    ///
    /// A cycle still loading is not cancelled; its outcome is discarded.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            if state.is_idle() {
                return false;
            }
            tracing::debug!(from = state.label(), "session reset");
            *state = InteractionState::Idle;
            true
        });
    }

    /// Enter `Loading`, returning the new generation.
    fn begin(&self, file_name: &str) -> Result<u64, SessionError> {
        let mut generation = None;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            generation = Some(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            *state = InteractionState::Loading {
                file_name: file_name.to_string(),
            };
            true
        });
        generation.ok_or(SessionError::ReviewInProgress)
    }

    /// Replace `Loading` with the cycle outcome if `generation` is current.
    fn settle(&self, generation: u64, next: InteractionState) -> bool {
        self.state.send_if_modified(|state| {
            if !state.is_loading() || self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Read the file, then ask the service for a report.
    async fn run_cycle(&self, file: &dyn FileSource) -> Result<ReviewResult, ReviewError> {
        let content = file.read_text().await.map_err(|source| ReviewError::Read {
            name: file.name().to_string(),
            source,
        })?;
        let source = SourceFile {
            name: file.name().to_string(),
            content,
        };

        let report = self.service.review_code(&source.content).await?;

        Ok(ReviewResult {
            file_name: source.name,
            report,
        })
    }
}

/// User-facing text for a failed cycle: the error's own message, or a
/// fixed fallback when that message is blank.
pub fn failure_message(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
