// Rust guideline compliant 2026-10-16

//! Implementation of the `apiout success` command.

use crate::render::parse_data;
use anyhow::Result;
use apiout_core::{Dispatcher, MemoryWriter};
use http::Response;

/// Builds a successful response for the given topic and payload.
///
/// Without `--data` the response carries no `Data` key.
///
/// # Arguments
///
/// * `dispatcher` - Dispatcher carrying the debug setting
/// * `msg_type` - Topic of the response
/// * `data` - Optional JSON payload
///
/// # Errors
///
/// Returns an error if `data` is not valid JSON.
pub fn execute(dispatcher: &Dispatcher, msg_type: String, data: Option<String>) -> Result<Response<Vec<u8>>> {
    let data = parse_data(data.as_deref())?;

    let mut writer = MemoryWriter::new();
    match data {
        Some(data) => dispatcher.success(&mut writer, msg_type, data)?,
        None => dispatcher.success_empty(&mut writer, msg_type)?,
    }
    Ok(writer.into_response())
}
