// File: crates/meridian-core/src/logging.rs
// Summary: tracing subscriber setup for binaries plus the debug-gated lifecycle log macro.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "meridian_core=debug,meridian_render_skia=info,meridian_demo=info";

/// Install a fmt subscriber honouring `RUST_LOG`. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Lifecycle debug event, emitted only while the process-wide debug flag is on.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::settings::debug() {
            ::tracing::debug!($($arg)*);
        }
    };
}
