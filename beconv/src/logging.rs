//! Tracing subscriber setup.

/// Install the global subscriber. Events go to stderr so `--stdout` output stays clean.
///
/// `RUST_LOG` wins over the level picked from `verbose`.
pub fn init(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
