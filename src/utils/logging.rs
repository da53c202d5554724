//! Logging setup.

use env_logger::Env;

/// Initialize `env_logger` from `RUST_LOG`, falling back to `warn`.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_from_env() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();
}
