// Rust guideline compliant 2026-10-16

//! Process-wide diagnostic logging toggle.
//!
//! When enabled, error responses and explicit sends that needed correcting
//! also emit a `tracing` event. The toggle never changes what is written to
//! the client.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables or disables diagnostic logging for the current process.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether diagnostic logging is enabled.
pub fn is_debug() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Logs an error response about to be written.
pub(crate) fn log_error(operation: &str, error: &dyn Display, message: &str, id: Option<i64>) {
    match id {
        Some(id) => tracing::warn!(
            operation,
            error = %error,
            user_message = message,
            id,
            "error response"
        ),
        None => tracing::warn!(
            operation,
            error = %error,
            user_message = message,
            "error response"
        ),
    }
}

/// Logs an explicit send rejected for its status code.
pub(crate) fn log_invalid_status(code: u16) {
    tracing::warn!(
        operation = "send",
        status = code,
        "invalid HTTP response code provided"
    );
}

/// Logs a topic derived from the status code because the caller left it blank.
pub(crate) fn log_synthesized_type(code: u16, msg_type: &str) {
    tracing::info!(
        operation = "send",
        status = code,
        msg_type,
        "envelope has no message type, defaulting to one based on the HTTP response code"
    );
}
