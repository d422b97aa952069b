// Rust guideline compliant 2026-10-16

//! Implementation of the `apiout send` command.
//!
//! Assembles an envelope from individual fields and passes it through the
//! explicit send path, so gaps are filled exactly as a server would fill
//! them.

use crate::render::parse_data;
use anyhow::{Context, Result};
use apiout_core::{Dispatcher, Envelope, ErrorDetail, MemoryWriter, MessageType};
use http::Response;

/// Fields of a manually assembled envelope.
#[derive(Debug, Clone, Default)]
pub struct SendArgs {
    /// HTTP status code to write.
    pub status: u16,
    /// Topic; derived from the status when missing.
    pub msg_type: Option<String>,
    /// Value of `OK` before validation.
    pub ok: bool,
    /// Optional JSON payload.
    pub data: Option<String>,
    /// Lower-level error text.
    pub error: Option<String>,
    /// Human-readable error message.
    pub message: Option<String>,
    /// Timestamp; stamped with the current time when missing.
    pub datetime: Option<String>,
}

/// Sends a manually assembled envelope with the given status.
///
/// # Errors
///
/// Returns an error if:
/// - `data` is not valid JSON
/// - The status code is not a valid HTTP status
pub fn execute(dispatcher: &Dispatcher, args: SendArgs) -> Result<Response<Vec<u8>>> {
    let envelope = Envelope {
        ok: args.ok,
        msg_type: args.msg_type.map(MessageType::from).unwrap_or_default(),
        data: parse_data(args.data.as_deref())?,
        error_data: ErrorDetail {
            error: args.error.unwrap_or_default(),
            message: args.message.unwrap_or_default(),
        },
        datetime: args.datetime.unwrap_or_default(),
    };

    let mut writer = MemoryWriter::new();
    dispatcher
        .send(&mut writer, envelope, args.status)
        .with_context(|| format!("Cannot send response with status {}", args.status))?;
    Ok(writer.into_response())
}
