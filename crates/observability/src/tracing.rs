//! Tracing subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines, level taken from `RUST_LOG`
/// (default `info`). A second call is a no-op.
pub fn init() {
    init_with_default("info");
}

/// Same as [`init`], with an explicit fallback filter for when `RUST_LOG`
/// is unset. Tests use this to force guard decisions into the output.
pub fn init_with_default(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init_with_default("debug");
    }
}
