use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays the demo transcript.
/// Quiet unless `RUST_LOG` asks for more.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
