//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "wnjgraph=info";

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (normally
/// `logging.filter` from the config) is used, falling back to
/// [`DEFAULT_FILTER`] if that directive does not parse. Logs go to stderr so
/// `wnjgraph query` output on stdout stays pure JSON. Subsequent calls are
/// silently ignored.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(DEFAULT_FILTER);
        init_logging("wnjgraph=debug");
    }

    #[test]
    fn init_logging_tolerates_bad_directive() {
        init_logging("wnjgraph=[[[");
    }
}
