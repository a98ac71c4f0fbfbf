use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `AMORT_LOG=debug`.
pub const LOG_ENV: &str = "AMORT_LOG";

/// Install a stderr subscriber so logs never mix with result output on stdout.
/// Defaults to `warn` when `AMORT_LOG` is unset or unparseable.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
