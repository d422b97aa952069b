// Rust guideline compliant 2026-10-16

//! Implementation of the `apiout error` command.

use anyhow::Result;
use apiout_core::{Dispatcher, MemoryWriter};
use http::Response;

/// Builds an error response, optionally carrying a record identifier.
///
/// # Arguments
///
/// * `dispatcher` - Dispatcher carrying the debug setting
/// * `error` - Lower-level error text
/// * `message` - Human-readable resolution message
/// * `id` - Identifier of an already-created record, if any
///
/// # Errors
///
/// Returns an error if the response cannot be written.
pub fn execute(
    dispatcher: &Dispatcher,
    error: String,
    message: String,
    id: Option<i64>,
) -> Result<Response<Vec<u8>>> {
    let mut writer = MemoryWriter::new();
    match id {
        Some(id) => dispatcher.error_with_id(&mut writer, error, message, id)?,
        None => dispatcher.error(&mut writer, error, message)?,
    }
    Ok(writer.into_response())
}
