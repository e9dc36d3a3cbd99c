//! Tracing setup for embedding applications.
//!
//! The crate itself only emits `tracing` events; this module is a convenience
//! for binaries (and tests) that want them on stderr.
//!
//! # Usage
//!
//! ```rust,ignore
//! theme_sync::logging::init();
//!
//! tracing::info!(theme = "cyber", "theme applied");
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Panics if a global subscriber is already set; use [`init_for_tests`] where
/// double-initialization is expected.
pub fn init() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Like [`init`] but tolerates an already-installed subscriber, so every test
/// can call it without coordinating.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
