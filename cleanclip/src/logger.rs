// cleanclip/src/logger.rs
//! Logging setup for the `cleanclip` binary.
//!
//! Library crates log through the `log` facade; this module wires it to
//! `env_logger` on stderr. `RUST_LOG` is honoured unless a CLI flag forces a
//! level.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Maps the global CLI flags to a level override.
///
/// `--quiet` silences everything, `--disable-debug` lowers `env_level` to
/// `info` when the environment asks for more (and leaves a quieter setting
/// alone), and `--debug` forces `debug`.
pub fn resolve_log_level(
    quiet: bool,
    debug: bool,
    disable_debug: bool,
    env_level: LevelFilter,
) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        (env_level > LevelFilter::Info).then_some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// The most verbose level `RUST_LOG` (or the default filter) enables.
pub fn env_max_level() -> LevelFilter {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .build()
        .filter()
}

/// Initialises the global logger; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised; keeping the existing one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(
            resolve_log_level(true, true, false, LevelFilter::Trace),
            Some(LevelFilter::Off)
        );
    }

    #[test]
    fn disable_debug_caps_verbose_environment_at_info() {
        assert_eq!(
            resolve_log_level(false, true, true, LevelFilter::Trace),
            Some(LevelFilter::Info)
        );
        assert_eq!(
            resolve_log_level(false, false, true, LevelFilter::Debug),
            Some(LevelFilter::Info)
        );
    }

    #[test]
    fn disable_debug_keeps_quieter_environment() {
        assert_eq!(resolve_log_level(false, false, true, LevelFilter::Warn), None);
        assert_eq!(resolve_log_level(false, true, true, LevelFilter::Error), None);
        assert_eq!(resolve_log_level(false, false, true, LevelFilter::Info), None);
    }

    #[test]
    fn no_flags_defer_to_environment() {
        assert_eq!(resolve_log_level(false, false, false, LevelFilter::Warn), None);
        assert_eq!(
            resolve_log_level(false, true, false, LevelFilter::Warn),
            Some(LevelFilter::Debug)
        );
    }
}
