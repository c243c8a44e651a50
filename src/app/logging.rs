use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default_spec = if verbose { "debug" } else { "warn" };
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| default_spec.to_string());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_spec))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
