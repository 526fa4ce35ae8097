//! codecritic: single-file AI code review (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod intake;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod providers;
pub mod shell;
