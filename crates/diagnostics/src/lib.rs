//! Lightweight logging shared by the bucketfs crates.
//!
//! Built on `emit`, written to stderr, and silent unless the embedding
//! application opts in:
//!
//! - `BUCKETFS_LOG` unset or `off` - no output
//! - `BUCKETFS_LOG=info` - operation-level logs
//! - `BUCKETFS_LOG=debug` - per-key diagnostic detail
//!
//! Library crates only call the `log_*` macros; `init_diagnostics` is for
//! application entry points and test binaries.

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

fn min_level(setting: &str) -> Option<emit::Level> {
    match setting {
        "debug" => Some(emit::Level::Debug),
        "info" => Some(emit::Level::Info),
        "warn" => Some(emit::Level::Warn),
        "error" => Some(emit::Level::Error),
        _ => None,
    }
}

/// Initialize logging from the `BUCKETFS_LOG` environment variable.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let setting = std::env::var("BUCKETFS_LOG").unwrap_or_else(|_| "off".to_string());
        if setting == "off" {
            return;
        }

        let level = min_level(&setting).unwrap_or_else(|| {
            eprintln!(
                "Warning: unknown BUCKETFS_LOG value '{}', using 'info'",
                setting
            );
            emit::Level::Info
        });

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The emitter must outlive every library call; the runtime handle is
        // intentionally never dropped.
        std::mem::forget(rt);
    });
}

/// Log operation-level events a user may want to see in normal use.
///
/// Examples: "S3 store ready", "loaded config"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log per-key detail useful when debugging.
///
/// Examples: "probing object x", "listed 14 keys under reports/"
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable oddities worth noting.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that end the current operation.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}
