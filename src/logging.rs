//! Diagnostic logging setup.
//!
//! All diagnostics go to stderr through `tracing`. `CODECRITIC_LOG` takes an
//! env-filter directive (e.g. `codecritic=debug,rig=info`); otherwise the
//! level comes from the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::constants;
use crate::env::Env;

/// Filter directive for a `-v` count when `CODECRITIC_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from the environment, falling back to `verbosity`.
pub fn build_filter(env: &Env, verbosity: u8) -> EnvFilter {
    env.non_empty(constants::ENV_LOG)
        .and_then(|directive| match EnvFilter::try_new(&directive) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Warning: ignoring invalid {} value: {e}", constants::ENV_LOG);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(env: &Env, verbosity: u8, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(env, verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn env_directive_wins() {
        let env = Env::mock([("CODECRITIC_LOG", "codecritic=debug")]);
        let filter = build_filter(&env, 0);
        assert_eq!(filter.to_string(), "codecritic=debug");
    }

    #[test]
    fn falls_back_to_verbosity() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(build_filter(&env, 1).to_string(), "info");
    }
}
