// bcg/src/logging.rs
//
// Tracing setup. Logs go to stderr; stdout is reserved for command output.

use std::io::IsTerminal;

use bcg_core::infrastructure::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) -> miette::Result<()> {
    let filter = build_filter(&config.level, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| miette::miette!("Failed to install log subscriber: {}", e))?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialised");
    Ok(())
}

fn build_filter(level: &str, env_directives: Option<String>) -> EnvFilter {
    if let Some(directives) = env_directives
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| {
        eprintln!(
            "⚠️  Invalid log level '{}', falling back to '{}'",
            level, FALLBACK_LEVEL
        );
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_configured_level() {
        let filter = build_filter("debug", None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_wins() {
        let filter = build_filter("debug", Some("warn".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let filter = build_filter("bcg_core=loud", None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
