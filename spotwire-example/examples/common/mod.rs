//! Shared helpers for the SpotWire examples.

/// Initialize logging for examples.
///
/// Honors `RUST_LOG`; set `RUST_LOG=spotwire_codec=debug` to see skipped
/// block extensions or `RUST_LOG=spotwire_decoder=trace` for every header.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
