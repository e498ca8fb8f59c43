//! Process-wide logging setup.

pub mod tracing;

/// Initialize logging for the process.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
