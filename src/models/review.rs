//! Review cycle types: the file under review, the finished report,
//! and the session state that ties them together.

use serde::{Deserialize, Serialize};

/// A selected file after its contents have been read.
///
/// Immutable once built; the orchestrator drops it when the cycle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Outcome of a successful review cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Name of the reviewed file (file name component, not the full path).
    pub file_name: String,
    /// Markdown report returned by the review service.
    pub report: String,
}

/// The interaction state of a review session.
///
/// Exactly one variant is active at a time, so a report and an error
/// message can never be held together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// Waiting for a file.
    #[default]
    Idle,
    /// A review cycle is in flight for the named file.
    Loading { file_name: String },
    /// The last cycle produced a report.
    Success(ReviewResult),
    /// The last cycle failed with a user-facing message.
    Failed { message: String },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading { .. })
    }

    /// Whether the state is `Success` or `Failed` and waits for a reset.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            InteractionState::Success(_) | InteractionState::Failed { .. }
        )
    }

    /// The held report, if the last cycle succeeded.
    pub fn result(&self) -> Option<&ReviewResult> {
        match self {
            InteractionState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The held failure message, if the last cycle failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            InteractionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Short lowercase label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Loading { .. } => "loading",
            InteractionState::Success(_) => "success",
            InteractionState::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = InteractionState::default();
        assert!(state.is_idle());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn accessors_follow_variant() {
        let ok = InteractionState::Success(ReviewResult {
            file_name: "main.rs".into(),
            report: "## Readability".into(),
        });
        assert!(ok.is_settled());
        assert_eq!(ok.result().unwrap().file_name, "main.rs");
        assert!(ok.error().is_none());

        let failed = InteractionState::Failed {
            message: "quota exceeded".into(),
        };
        assert!(failed.is_settled());
        assert_eq!(failed.error(), Some("quota exceeded"));
        assert!(failed.result().is_none());

        let loading = InteractionState::Loading {
            file_name: "main.rs".into(),
        };
        assert!(loading.is_loading());
        assert!(!loading.is_settled());
        assert_eq!(loading.label(), "loading");
    }
}
