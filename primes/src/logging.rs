//! Tracing subscriber setup for binaries

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "primes=info",
        1 => "primes=debug",
        _ => "primes=trace",
    }
}

/// Install the global subscriber once per process
///
/// `RUST_LOG` takes precedence over `verbosity`. Output goes to stderr so
/// that results on stdout stay machine readable.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "primes=info");
        assert_eq!(default_directive(1), "primes=debug");
        assert_eq!(default_directive(7), "primes=trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(0);
        init_logging(2);
    }
}
