use tracing::Level;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Returns `false` if a subscriber
/// was already installed, which leaves the existing one in place.
pub fn init_logging(level: Level, json_output: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geo_ranges={},warn", level)));

    if json_output {
        let fmt_layer = fmt::layer()
            .json()
            .with_timer(SystemTime)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_thread_names(true);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(SystemTime)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}

/// Parse a level name such as `"debug"`, case-insensitively.
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse::<Level>().ok()
}

/// Records one completed radius query at trace level
#[macro_export]
macro_rules! log_query {
    ($center:expr, $radius:expr, $ranges:expr, $duration:expr) => {
        tracing::trace!(
            operation = "query_ranges",
            center = %$center,
            radius = $radius,
            ranges = $ranges,
            duration_us = $duration.as_micros() as u64,
            "Query ranges computed"
        )
    };
}

/// Records one range scan against a backend
#[macro_export]
macro_rules! log_scan {
    ($field:expr, $range:expr, $hits:expr) => {
        tracing::trace!(
            operation = "range_scan",
            field = $field,
            range = %$range,
            hits = $hits,
            "Range scan completed"
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("INFO"), Some(Level::INFO));
        assert_eq!(parse_level(" warn "), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_init_logging_twice() {
        let _ = init_logging(Level::DEBUG, false);
        // Second install must not panic
        assert!(!init_logging(Level::INFO, true));
    }
}
