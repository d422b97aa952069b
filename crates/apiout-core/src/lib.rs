// Rust guideline compliant 2026-10-16

//! apiout Core Library
//!
//! Uniform JSON response envelopes for HTTP APIs:
//! - Envelope model (`OK`, `Type`, `Data`, `ErrorData`, `Datetime`)
//! - Open message-type topics with well-known constants
//! - Dispatcher with implicit (success/error) and explicit (`send`) paths
//! - Shorthand helpers for common outcomes
//! - Transport abstraction with in-memory and `http::Response` bindings
//! - Diagnostic logging toggle and configuration

pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod helpers;
pub mod message_type;
pub mod time;
pub mod transport;

pub use config::Config;
pub use diagnostics::{is_debug, set_debug};
pub use dispatch::{
    error, error_with_id, send, success, validate_status, write_envelope, Dispatcher,
    ERROR_STATUS, SUCCESS_STATUS,
};
pub use envelope::{status_message_type, Corrections, Envelope, ErrorDetail};
pub use error::{ApiError, ConfigError, SendError, WriteError};
pub use helpers::{
    data_found, delete_ok, error_already_exists, error_input_invalid,
    error_input_invalid_with_id, insert_ok, insert_ok_with_data, update_ok, update_ok_with_data,
};
pub use message_type::MessageType;
pub use time::{format_timestamp, now_timestamp};
pub use transport::{MemoryWriter, ResponseWriter, JSON_CONTENT_TYPE};
