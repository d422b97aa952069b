// Rust guideline compliant 2026-10-16

//! Building, validating and writing envelopes to a transport.
//!
//! Two kinds of entry points exist:
//!
//! - implicit ones ([`Dispatcher::success`], [`Dispatcher::error`],
//!   [`Dispatcher::error_with_id`]) that fix the status code and always
//!   produce a valid envelope, so they can only fail while writing;
//! - the explicit [`Dispatcher::send`], for callers that need another status
//!   code or assemble the envelope by hand. It fills gaps in the envelope and
//!   rejects invalid status codes before writing anything.
//!
//! The free functions at the bottom use [`Dispatcher::global`].

use crate::config::Config;
use crate::diagnostics;
use crate::envelope::{ErrorDetail, Envelope};
use crate::error::{SendError, WriteError};
use crate::message_type::MessageType;
use crate::transport::{ResponseWriter, JSON_CONTENT_TYPE};
use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;
use std::fmt::Display;

/// Status code written by the success entry points.
pub const SUCCESS_STATUS: StatusCode = StatusCode::OK;

/// Status code written by the error entry points.
pub const ERROR_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// Writes envelopes to a [`ResponseWriter`].
///
/// A dispatcher either follows the process-wide debug toggle
/// ([`Dispatcher::global`]) or carries its own setting
/// ([`Dispatcher::with_debug`], [`Dispatcher::from_config`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatcher {
    debug: Option<bool>,
}

impl Dispatcher {
    /// Dispatcher that reads [`diagnostics::is_debug`] on every call.
    #[must_use]
    pub const fn global() -> Self {
        Self { debug: None }
    }

    /// Dispatcher with a fixed debug setting.
    #[must_use]
    pub const fn with_debug(debug: bool) -> Self {
        Self { debug: Some(debug) }
    }

    /// Dispatcher using the debug setting from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_debug(config.debug)
    }

    /// Returns whether this dispatcher emits diagnostic log events.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or_else(diagnostics::is_debug)
    }

    /// Writes a successful response with status 200.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized or the transport
    /// rejects the body.
    pub fn success<W, T>(
        &self,
        w: &mut W,
        msg_type: impl Into<MessageType>,
        data: T,
    ) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        let envelope = Envelope::success(msg_type.into(), Some(data));
        write_envelope(w, &envelope, SUCCESS_STATUS)
    }

    /// Writes a successful response with status 200 and no `Data` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn success_empty<W>(&self, w: &mut W, msg_type: impl Into<MessageType>) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
    {
        let envelope = Envelope::<()>::success(msg_type.into(), None);
        write_envelope(w, &envelope, SUCCESS_STATUS)
    }

    /// Writes an error response with status 500 and the `error` topic.
    ///
    /// `error` is any error value; its `Display` text becomes
    /// `ErrorData.Error`. `message` should tell a user how to resolve it.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn error<W>(
        &self,
        w: &mut W,
        error: impl Display,
        message: impl Into<String>,
    ) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
    {
        let detail = ErrorDetail::new(&error, message);
        if self.debug_enabled() {
            diagnostics::log_error("error", &error, &detail.message, None);
        }

        let envelope = Envelope::<()>::failure(detail, None);
        write_envelope(w, &envelope, ERROR_STATUS)
    }

    /// Writes an error response that also carries a record identifier.
    ///
    /// Used when part of the work, such as creating a record, already
    /// succeeded; the client retries against `id` instead of creating a
    /// duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn error_with_id<W>(
        &self,
        w: &mut W,
        error: impl Display,
        message: impl Into<String>,
        id: i64,
    ) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
    {
        let detail = ErrorDetail::new(&error, message);
        if self.debug_enabled() {
            diagnostics::log_error("error_with_id", &error, &detail.message, Some(id));
        }

        let envelope = Envelope::failure(detail, Some(id));
        write_envelope(w, &envelope, ERROR_STATUS)
    }

    /// Writes a caller-assembled envelope with any status code.
    ///
    /// The envelope is checked in this order, each step only filling gaps:
    ///
    /// 1. a blank `Datetime` is stamped with the current time;
    /// 2. non-empty `ErrorData` forces `OK` to false;
    /// 3. the response code must be a valid HTTP status;
    /// 4. a blank `Type` becomes `"<code>-<reason>"`, e.g. `404-Not Found`.
    ///
    /// No rule ties status ranges to the presence of `ErrorData`.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::InvalidResponseCode`] without writing anything
    /// when the code is not a valid status, and [`SendError::Write`] when
    /// serialization or the transport fails.
    pub fn send<W, T>(
        &self,
        w: &mut W,
        mut envelope: Envelope<T>,
        response_code: impl Into<u16>,
    ) -> Result<(), SendError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        let code = response_code.into();
        envelope.reconcile();

        let Some(status) = validate_status(code) else {
            if self.debug_enabled() {
                diagnostics::log_invalid_status(code);
            }
            return Err(SendError::InvalidResponseCode(code));
        };

        if envelope.ensure_type(status) && self.debug_enabled() {
            diagnostics::log_synthesized_type(code, envelope.msg_type.as_str());
        }

        write_envelope(w, &envelope, status)?;
        Ok(())
    }
}

/// Returns the status for `code` if it is a valid HTTP status value.
///
/// Codes below 100 (the lowest status class) or above 999 are rejected.
#[must_use]
pub fn validate_status(code: u16) -> Option<StatusCode> {
    StatusCode::from_u16(code).ok()
}

/// Sets the JSON content type, writes `status`, then the serialized envelope.
///
/// If serialization fails the header and status have already been written;
/// treat the response as broken.
///
/// # Errors
///
/// Returns an error if the envelope cannot be serialized or the transport
/// rejects the body.
pub fn write_envelope<W, T>(w: &mut W, envelope: &Envelope<T>, status: StatusCode) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    w.set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    w.write_status(status);

    let body = envelope.to_json()?;
    w.write_body(&body)?;
    Ok(())
}

/// Writes a successful response using [`Dispatcher::global`].
///
/// # Errors
///
/// See [`Dispatcher::success`].
pub fn success<W, T>(w: &mut W, msg_type: impl Into<MessageType>, data: T) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Dispatcher::global().success(w, msg_type, data)
}

/// Writes an error response using [`Dispatcher::global`].
///
/// # Errors
///
/// See [`Dispatcher::error`].
pub fn error<W>(w: &mut W, error: impl Display, message: impl Into<String>) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
{
    Dispatcher::global().error(w, error, message)
}

/// Writes an error response carrying an identifier using
/// [`Dispatcher::global`].
///
/// # Errors
///
/// See [`Dispatcher::error_with_id`].
pub fn error_with_id<W>(
    w: &mut W,
    error: impl Display,
    message: impl Into<String>,
    id: i64,
) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
{
    Dispatcher::global().error_with_id(w, error, message, id)
}

/// Writes a caller-assembled envelope using [`Dispatcher::global`].
///
/// # Errors
///
/// See [`Dispatcher::send`].
pub fn send<W, T>(w: &mut W, envelope: Envelope<T>, response_code: impl Into<u16>) -> Result<(), SendError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Dispatcher::global().send(w, envelope, response_code)
}
