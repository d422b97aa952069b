// Rust guideline compliant 2026-10-16

//! Timestamp helpers for envelope `Datetime` values.

use chrono::{DateTime, Utc};

/// Layout of every envelope timestamp. The trailing `Z` is literal; values
/// are always produced from UTC instants.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Returns the current UTC instant as an envelope timestamp.
///
/// # Returns
///
/// A string such as `2026-01-02T03:04:05.678Z`.
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Formats a UTC instant with millisecond precision.
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}
