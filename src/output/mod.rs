//! Output renderers (terminal, JSON, markdown) and the session screen.

pub mod json;
pub mod markdown;
pub mod screen;
pub mod terminal;

use crate::models::ReviewResult;

/// Trait for rendering a finished review to an output format.
pub trait OutputRenderer {
    /// Render the review to a string.
    fn render(&self, review: &ReviewResult) -> String;
}
