// Rust guideline compliant 2026-10-16

//! The response envelope sent back for every API call.
//!
//! Every response has the same shape: an `OK` status, a `Type` topic, an
//! optional `Data` payload, optional `ErrorData`, and a `Datetime` stamp.
//! Errors go in their own field so clients never have to guess whether an
//! empty `Data` means failure.

use crate::message_type::MessageType;
use crate::time::now_timestamp;
use http::StatusCode;
use serde::ser::{Error as _, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Descriptive data about an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Lower-level error text, usually the `Display` form of an error value.
    #[serde(rename = "Error", default, skip_serializing_if = "String::is_empty")]
    pub error: String,

    /// Human-friendly guidance that can be shown in a UI.
    #[serde(rename = "Message", default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorDetail {
    /// Creates error detail from an error value and a human message.
    pub fn new(error: &impl Display, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }

    /// Returns true when neither field carries text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error.is_empty() && self.message.is_empty()
    }
}

/// The envelope wrapping every response body.
///
/// `Data` is omitted from JSON when it is `None` or serializes to `null`,
/// and `ErrorData` is omitted when it is empty. A populated `ErrorData`
/// always means `OK` is false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// True when the request completed without error.
    #[serde(rename = "OK")]
    pub ok: bool,

    /// Topic clients use to decide how to handle the response.
    #[serde(rename = "Type", default)]
    pub msg_type: MessageType,

    /// Application payload. Normally only set on success, but see
    /// [`crate::Dispatcher::error_with_id`].
    #[serde(rename = "Data")]
    pub data: Option<T>,

    /// Error information, only set when `ok` is false.
    #[serde(rename = "ErrorData", default)]
    pub error_data: ErrorDetail,

    /// Creation time, `YYYY-MM-DDTHH:MM:SS.sssZ` in UTC.
    #[serde(rename = "Datetime", default)]
    pub datetime: String,
}

/// Fields the explicit dispatcher had to fill in or correct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corrections {
    /// `Datetime` was blank and has been stamped.
    pub datetime_stamped: bool,
    /// `OK` was true alongside error data and has been forced to false.
    pub ok_forced_false: bool,
    /// `Type` was blank and has been derived from the status code.
    pub type_synthesized: bool,
}

impl Corrections {
    /// Returns true when the envelope was left untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl<T> Envelope<T> {
    /// Builds an envelope stamped with the current UTC time.
    ///
    /// The other fields are copied verbatim; no validation is applied.
    pub fn build(
        ok: bool,
        msg_type: MessageType,
        data: Option<T>,
        error_data: ErrorDetail,
    ) -> Self {
        Self {
            ok,
            msg_type,
            data,
            error_data,
            datetime: now_timestamp(),
        }
    }

    /// Builds a successful envelope.
    pub fn success(msg_type: MessageType, data: Option<T>) -> Self {
        Self::build(true, msg_type, data, ErrorDetail::default())
    }

    /// Builds an error envelope with the `error` topic.
    ///
    /// `data` is usually `None`; pass an identifier when the client should
    /// retry against an already-created record.
    pub fn failure(error_data: ErrorDetail, data: Option<T>) -> Self {
        Self::build(false, MessageType::ERROR, data, error_data)
    }

    /// Fills gaps left in a manually assembled envelope.
    ///
    /// Stamps a blank `Datetime`, forces `OK` to false when error data is
    /// present, and derives a `Type` from `status` when it is blank.
    /// Running it again on its own output changes nothing.
    pub fn normalize(&mut self, status: StatusCode) -> Corrections {
        let mut corrections = self.reconcile();
        corrections.type_synthesized = self.ensure_type(status);
        corrections
    }

    /// Stamps a blank datetime and reconciles `ok` with `error_data`.
    pub(crate) fn reconcile(&mut self) -> Corrections {
        let mut corrections = Corrections::default();

        if self.datetime.trim().is_empty() {
            self.datetime = now_timestamp();
            corrections.datetime_stamped = true;
        }

        // Data may still accompany an error, so only `ok` is touched.
        if !self.error_data.is_empty() && self.ok {
            self.ok = false;
            corrections.ok_forced_false = true;
        }

        corrections
    }

    /// Replaces a blank topic with one derived from `status`.
    pub(crate) fn ensure_type(&mut self, status: StatusCode) -> bool {
        if !self.msg_type.is_blank() {
            return false;
        }
        self.msg_type = status_message_type(status);
        true
    }
}

// Data is rendered up front so a payload that serializes to `null`
// (`()`, `Value::Null`, a `None` passed as data) is dropped like a missing one.
impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = match &self.data {
            Some(data) => serde_json::value::to_raw_value(data)
                .map(|raw| (raw.get() != "null").then_some(raw))
                .map_err(S::Error::custom)?,
            None => None,
        };

        let mut state = serializer.serialize_struct("Envelope", 5)?;
        state.serialize_field("OK", &self.ok)?;
        state.serialize_field("Type", &self.msg_type)?;
        match &data {
            Some(raw) => state.serialize_field("Data", raw)?,
            None => state.skip_field("Data")?,
        }
        if self.error_data.is_empty() {
            state.skip_field("ErrorData")?;
        } else {
            state.serialize_field("ErrorData", &self.error_data)?;
        }
        state.serialize_field("Datetime", &self.datetime)?;
        state.end()
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serializes the envelope to its wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be represented as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Topic used when a caller sends an envelope without one, e.g.
/// `404-Not Found`.
#[must_use]
pub fn status_message_type(status: StatusCode) -> MessageType {
    MessageType::new(format!(
        "{}-{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    ))
}
