//! Integration test using a mock review service.
//!
//! Drives `ReviewSession` through full review cycles without making
//! real API calls by using a mock implementation of ReviewService.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

use codecritic::constants::FALLBACK_ERROR_MESSAGE;
use codecritic::intake::{DiskFile, FileSource};
use codecritic::models::{InteractionState, ReviewResult};
use codecritic::orchestrator::{ReviewSession, SessionError};
use codecritic::providers::{ReviewService, ServiceError, require_report};

/// A mock review service with a canned outcome.
struct MockService {
    outcome: Result<String, String>,
    /// Source texts received, in call order.
    seen: Mutex<Vec<String>>,
    /// When set, each call waits for a notification before answering.
    gate: Option<Arc<Notify>>,
}

impl MockService {
    fn ok(report: &str) -> Self {
        Self {
            outcome: Ok(report.to_string()),
            seen: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            ..Self::ok("")
        }
    }

    fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewService for MockService {
    async fn review_code(&self, source_text: &str) -> Result<String, ServiceError> {
        self.seen.lock().unwrap().push(source_text.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.outcome {
            Ok(report) => require_report(report.clone()),
            Err(message) => Err(ServiceError::Api(message.clone())),
        }
    }
}

/// An in-memory file.
struct MemFile {
    name: &'static str,
    content: &'static str,
}

#[async_trait]
impl FileSource for MemFile {
    fn name(&self) -> &str {
        self.name
    }

    async fn read_text(&self) -> io::Result<String> {
        Ok(self.content.to_string())
    }
}

fn mem(name: &'static str, content: &'static str) -> MemFile {
    MemFile { name, content }
}

// ---------------------------------------------------------------------------
// successful cycles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_cycle_holds_report() {
    let service = Arc::new(MockService::ok("## Bugs\n* none"));
    let session = ReviewSession::new(service.clone());
    assert_eq!(session.state(), InteractionState::Idle);

    let state = session.submit(&mem("main.py", "print(1)")).await.unwrap();

    let expected = InteractionState::Success(ReviewResult {
        file_name: "main.py".into(),
        report: "## Bugs\n* none".into(),
    });
    assert_eq!(state, expected);
    assert_eq!(session.state(), expected);
    assert_eq!(service.calls(), vec!["print(1)".to_string()]);
}

#[tokio::test]
async fn empty_file_is_still_sent() {
    let service = Arc::new(MockService::ok("Looks fine."));
    let session = ReviewSession::new(service.clone());

    let state = session.submit(&mem("empty.rs", "")).await.unwrap();

    assert!(state.result().is_some());
    assert_eq!(service.calls(), vec![String::new()]);
}

#[tokio::test]
async fn disk_file_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ts");
    std::fs::write(&path, "export const x = 1;\n").unwrap();

    let service = Arc::new(MockService::ok("## Summary"));
    let session = ReviewSession::new(service.clone());
    let state = session.submit(&DiskFile::new(&path)).await.unwrap();

    assert_eq!(state.result().unwrap().file_name, "app.ts");
    assert_eq!(service.calls(), vec!["export const x = 1;\n".to_string()]);
}

// ---------------------------------------------------------------------------
// failed cycles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn service_failure_carries_message() {
    let session = ReviewSession::new(Arc::new(MockService::failing("quota exceeded")));

    let state = session.submit(&mem("a.go", "package main")).await.unwrap();

    assert_eq!(
        state,
        InteractionState::Failed {
            message: "quota exceeded".into()
        }
    );
    assert!(state.result().is_none());
}

#[tokio::test]
async fn blank_failure_message_uses_fallback() {
    let session = ReviewSession::new(Arc::new(MockService::failing("")));

    let state = session.submit(&mem("a.go", "package main")).await.unwrap();

    assert_eq!(state.error(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn empty_report_is_a_failure() {
    let session = ReviewSession::new(Arc::new(MockService::ok("  \n")));

    let state = session.submit(&mem("a.rb", "puts 1")).await.unwrap();

    let message = state.error().unwrap();
    assert!(message.contains("empty or invalid response"), "got: {message}");
}

#[tokio::test]
async fn unreadable_file_fails_without_calling_service() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(MockService::ok("unused"));
    let session = ReviewSession::new(service.clone());

    let state = session
        .submit(&DiskFile::new(dir.path().join("gone.rs")))
        .await
        .unwrap();

    let message = state.error().unwrap();
    assert!(message.contains("failed to read gone.rs"), "got: {message}");
    assert!(service.calls().is_empty());
}

// ---------------------------------------------------------------------------
// reset and resubmission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_is_idempotent() {
    let session = ReviewSession::new(Arc::new(MockService::ok("ok")));

    session.reset();
    assert_eq!(session.state(), InteractionState::Idle);

    session.submit(&mem("x.c", "int x;")).await.unwrap();
    session.reset();
    session.reset();
    assert_eq!(session.state(), InteractionState::Idle);
}

#[tokio::test]
async fn resubmit_after_failure_clears_error() {
    let failing = ReviewSession::new(Arc::new(MockService::failing("boom")));
    let state = failing.submit(&mem("x.c", "int x;")).await.unwrap();
    assert!(state.error().is_some());

    // A submit from a settled state starts a fresh cycle without a reset.
    let state = failing.submit(&mem("y.c", "int y;")).await.unwrap();
    assert_eq!(state.error(), Some("boom"));

    let session = ReviewSession::new(Arc::new(MockService::ok("fine")));
    session.submit(&mem("x.c", "int x;")).await.unwrap();
    let state = session.submit(&mem("y.c", "int y;")).await.unwrap();
    assert_eq!(state.result().unwrap().file_name, "y.c");
    assert!(state.error().is_none());
}

// ---------------------------------------------------------------------------
// observing an in-flight cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn loading_is_observable_and_exclusive() {
    let gate = Arc::new(Notify::new());
    let service = Arc::new(MockService::ok("## Done").gated(gate.clone()));
    let session = Arc::new(ReviewSession::new(service));
    let mut rx = session.subscribe();

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit(&mem("slow.rs", "fn slow() {}")).await })
    };

    rx.changed().await.unwrap();
    assert_eq!(
        *rx.borrow_and_update(),
        InteractionState::Loading {
            file_name: "slow.rs".into()
        }
    );

    let second = session.submit(&mem("other.rs", "")).await;
    assert_eq!(second, Err(SessionError::ReviewInProgress));
    assert!(session.state().is_loading());

    gate.notify_one();
    let settled = task.await.unwrap().unwrap();
    assert_eq!(settled.result().unwrap().report, "## Done");

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_settled());
}

#[tokio::test]
async fn reset_while_loading_discards_outcome() {
    let gate = Arc::new(Notify::new());
    let service = Arc::new(MockService::failing("late").gated(gate.clone()));
    let session = Arc::new(ReviewSession::new(service));
    let mut rx = session.subscribe();

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit(&mem("slow.rs", "")).await })
    };

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_loading());

    session.reset();
    assert_eq!(session.state(), InteractionState::Idle);

    gate.notify_one();
    let settled = task.await.unwrap().unwrap();
    assert_eq!(settled, InteractionState::Idle);
    assert_eq!(session.state(), InteractionState::Idle);
}
