//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// About line with ANSI styling for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1mcodecritic\x1b[0m \x1b[2m· AI code review for a single source file\x1b[0m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_names_the_tool() {
        assert!(ABOUT_STYLED.contains("codecritic"));
    }
}
