use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the jdiff CLI
///
/// Logs go to stderr so they never mix with XML written to stdout. The level is controlled via
/// the RUST_LOG environment variable:
/// - RUST_LOG=debug jdiff api.json  (one line per package and class)
/// - RUST_LOG=info jdiff api.json   (run summary)
/// - unset                          (warnings only)
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
