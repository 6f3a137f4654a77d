//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=toml_lexer=trace cargo test -p toml_lexer`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_test_writer())
                .with(filter)
                .init();
        }
    });
}
