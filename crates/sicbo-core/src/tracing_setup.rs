//! Log output for sicbo binaries and tests.
//!
//! One filter source (`SICBO_LOG`, default `sicbo=info`) and two output
//! formats. Everything is written to stderr; stdout belongs to command
//! output such as replay status JSON.

use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::{fmt as layer_fmt, prelude::*, EnvFilter};

/// Environment variable holding per-crate directives,
/// e.g. `SICBO_LOG=sicbo_feed=debug,sicbo_forecast=warn`.
pub const LOG_ENV: &str = "SICBO_LOG";

/// Round summaries from the session and ingestion totals from the feed.
pub const DEFAULT_FILTER: &str = "sicbo=info";

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event, fields flattened to the top level.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Filter from `SICBO_LOG`, or [`DEFAULT_FILTER`] when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the text subscriber. See [`init_tracing_with`].
pub fn init_tracing() -> bool {
    init_tracing_with(LogFormat::Text)
}

/// Install the global subscriber in `format`.
///
/// Only the first call in a process does anything. Returns `true` if this
/// call installed the subscriber, `false` if one was already set (by an
/// earlier call or by the embedding application).
pub fn init_tracing_with(format: LogFormat) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(env_filter());
        installed = match format {
            LogFormat::Text => registry
                .with(
                    layer_fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_names(true),
                )
                .try_init()
                .is_ok(),
            LogFormat::Json => registry
                .with(
                    layer_fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(false)
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .try_init()
                .is_ok(),
        };
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default(), LogFormat::Text);
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
