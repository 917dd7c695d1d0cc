//! Logging bootstrap for dsenv binaries.
//!
//! Logging is controlled entirely through environment variables so that the
//! resolver can be diagnosed on a hosting platform without code changes.
//!
//! # Environment Variables
//!
//! - `DSENV_DEBUG=true` (or `1`, `yes`) - Enable debug logging
//! - `DSENV_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `DSENV_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use dsenv_config::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//! ```

use std::sync::Once;

use crate::env::{EnvSource, StdEnvSource};

static INIT: Once = Once::new();

/// Variable enabling debug logging.
pub const DEBUG_VAR: &str = "DSENV_DEBUG";
/// Variable selecting the log level.
pub const LEVEL_VAR: &str = "DSENV_LOG_LEVEL";
/// Variable selecting the output format.
pub const FORMAT_VAR: &str = "DSENV_LOG_FORMAT";

/// Check if debug logging is enabled in `env`.
pub fn is_debug_enabled_in<E: EnvSource + ?Sized>(env: &E) -> bool {
    env.get(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Check if debug logging is enabled via `DSENV_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    is_debug_enabled_in(&StdEnvSource)
}

/// Resolve the log level from `env`.
///
/// Defaults to "debug" if debug logging is enabled, otherwise "warn".
pub fn log_level_in<E: EnvSource + ?Sized>(env: &E) -> &'static str {
    let fallback = if is_debug_enabled_in(env) { "debug" } else { "warn" };
    match env.get(LEVEL_VAR) {
        Some(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        None => fallback,
    }
}

/// Resolve the log format from `env`. Defaults to "json".
pub fn log_format_in<E: EnvSource + ?Sized>(env: &E) -> &'static str {
    env.get(FORMAT_VAR)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the logging system.
///
/// Subsequent calls are no-ops. Without `DSENV_DEBUG` or `DSENV_LOG_LEVEL`
/// nothing is installed, and the host application may bring its own
/// subscriber.
pub fn init() {
    init_with_default(None);
}

/// Initialize logging, using `default_level` when the environment does not
/// request a level.
pub fn init_with_default(default_level: Option<&'static str>) {
    INIT.call_once(|| {
        let env = StdEnvSource;
        let requested = is_debug_enabled_in(&env) || env.contains(LEVEL_VAR);
        if !requested && default_level.is_none() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = match default_level {
                Some(level) if !requested => level,
                _ => log_level_in(&env),
            };
            let filter = EnvFilter::try_new(format!(
                "dsenv={},dsenv_config={},dsenv_mysql={},dsenv_cli={}",
                level, level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // Logs go to stderr so command output stays machine-readable.
            match log_format_in(&env) {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json().with_writer(std::io::stderr))
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact().with_writer(std::io::stderr))
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty().with_writer(std::io::stderr))
                        .init();
                }
            }

            tracing::debug!(
                level = level,
                format = log_format_in(&env),
                "dsenv logging initialized"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;

    #[test]
    fn test_debug_disabled_by_default() {
        assert!(!is_debug_enabled_in(&MapEnvSource::new()));
    }

    #[test]
    fn test_debug_flag_values() {
        for value in ["true", "1", "YES"] {
            let env = MapEnvSource::new().set(DEBUG_VAR, value);
            assert!(is_debug_enabled_in(&env), "{value} should enable debug");
        }
        let env = MapEnvSource::new().set(DEBUG_VAR, "off");
        assert!(!is_debug_enabled_in(&env));
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(log_level_in(&MapEnvSource::new()), "warn");
        let env = MapEnvSource::new().set(DEBUG_VAR, "true");
        assert_eq!(log_level_in(&env), "debug");
    }

    #[test]
    fn test_log_level_explicit() {
        let env = MapEnvSource::new().set(LEVEL_VAR, "INFO");
        assert_eq!(log_level_in(&env), "info");
        let env = MapEnvSource::new().set(LEVEL_VAR, "loud");
        assert_eq!(log_level_in(&env), "warn");
    }

    #[test]
    fn test_log_format() {
        assert_eq!(log_format_in(&MapEnvSource::new()), "json");
        let env = MapEnvSource::new().set(FORMAT_VAR, "Pretty");
        assert_eq!(log_format_in(&env), "pretty");
        let env = MapEnvSource::new().set(FORMAT_VAR, "xml");
        assert_eq!(log_format_in(&env), "json");
    }
}
