//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Defaults to INFO on stderr; `RUST_LOG` overrides. Under a test runner the
/// default drops to DEBUG and output goes through the capture-aware test
/// writer.
pub fn init() {
    INIT.call_once(|| {
        let is_test = std::env::var_os("NEXTEST").is_some()
            || std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        let result = if is_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
