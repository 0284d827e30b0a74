//! Logging utilities for multi-chat
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    trace as log_trace,
    warn as log_warn,
};

/// Longest body excerpt written to the logs.
pub(crate) const BODY_PREVIEW_CHARS: usize = 500;

/// Truncate a provider body for logging, counting chars rather than bytes.
pub(crate) fn body_preview(body: &str) -> String {
    let mut preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if body.chars().count() > BODY_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}
