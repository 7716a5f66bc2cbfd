use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber that logs to stderr, filtered by `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Disables terminal colors when `NO_COLOR` is set.
pub fn enable_paint() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color {
        yansi::disable();
    }
}
