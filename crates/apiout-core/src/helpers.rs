// Rust guideline compliant 2026-10-16

//! Shorthand responses for common outcomes.
//!
//! Each helper picks a well-known topic or error and delegates to
//! [`Dispatcher::success`] or [`Dispatcher::error`]. The free functions use
//! [`Dispatcher::global`].

use crate::dispatch::Dispatcher;
use crate::error::{ApiError, WriteError};
use crate::message_type::MessageType;
use crate::transport::ResponseWriter;
use serde::Serialize;

impl Dispatcher {
    /// Data was inserted; returns the new record's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn insert_ok<W: ResponseWriter + ?Sized>(&self, w: &mut W, id: i64) -> Result<(), WriteError> {
        self.success(w, MessageType::INSERT_OK, id)
    }

    /// Data was inserted; returns arbitrary data instead of just an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized or the transport
    /// rejects the body.
    pub fn insert_ok_with_data<W, T>(&self, w: &mut W, data: T) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        self.success(w, MessageType::INSERT_OK, data)
    }

    /// Data was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn update_ok<W: ResponseWriter + ?Sized>(&self, w: &mut W) -> Result<(), WriteError> {
        self.success_empty(w, MessageType::UPDATE_OK)
    }

    /// Data was updated; returns the updated data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized or the transport
    /// rejects the body.
    pub fn update_ok_with_data<W, T>(&self, w: &mut W, data: T) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        self.success(w, MessageType::UPDATE_OK, data)
    }

    /// Data was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn delete_ok<W: ResponseWriter + ?Sized>(&self, w: &mut W) -> Result<(), WriteError> {
        self.success_empty(w, MessageType::DELETE_OK)
    }

    /// Data was looked up and found.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized or the transport
    /// rejects the body.
    pub fn data_found<W, T>(&self, w: &mut W, data: T) -> Result<(), WriteError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize,
    {
        self.success(w, MessageType::DATA_FOUND, data)
    }

    /// Input validation failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn error_input_invalid<W: ResponseWriter + ?Sized>(
        &self,
        w: &mut W,
        message: impl Into<String>,
    ) -> Result<(), WriteError> {
        self.error(w, ApiError::InputInvalid, message)
    }

    /// The record being created already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn error_already_exists<W: ResponseWriter + ?Sized>(
        &self,
        w: &mut W,
        message: impl Into<String>,
    ) -> Result<(), WriteError> {
        self.error(w, ApiError::AlreadyExists, message)
    }

    /// Input validation failed after a record was already saved as `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport rejects the body.
    pub fn error_input_invalid_with_id<W: ResponseWriter + ?Sized>(
        &self,
        w: &mut W,
        message: impl Into<String>,
        id: i64,
    ) -> Result<(), WriteError> {
        self.error_with_id(w, ApiError::InputInvalid, message, id)
    }
}

/// See [`Dispatcher::insert_ok`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn insert_ok<W: ResponseWriter + ?Sized>(w: &mut W, id: i64) -> Result<(), WriteError> {
    Dispatcher::global().insert_ok(w, id)
}

/// See [`Dispatcher::insert_ok_with_data`].
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized or the transport rejects
/// the body.
pub fn insert_ok_with_data<W, T>(w: &mut W, data: T) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Dispatcher::global().insert_ok_with_data(w, data)
}

/// See [`Dispatcher::update_ok`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn update_ok<W: ResponseWriter + ?Sized>(w: &mut W) -> Result<(), WriteError> {
    Dispatcher::global().update_ok(w)
}

/// See [`Dispatcher::update_ok_with_data`].
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized or the transport rejects
/// the body.
pub fn update_ok_with_data<W, T>(w: &mut W, data: T) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Dispatcher::global().update_ok_with_data(w, data)
}

/// See [`Dispatcher::delete_ok`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn delete_ok<W: ResponseWriter + ?Sized>(w: &mut W) -> Result<(), WriteError> {
    Dispatcher::global().delete_ok(w)
}

/// See [`Dispatcher::data_found`].
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized or the transport rejects
/// the body.
pub fn data_found<W, T>(w: &mut W, data: T) -> Result<(), WriteError>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Dispatcher::global().data_found(w, data)
}

/// See [`Dispatcher::error_input_invalid`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn error_input_invalid<W: ResponseWriter + ?Sized>(
    w: &mut W,
    message: impl Into<String>,
) -> Result<(), WriteError> {
    Dispatcher::global().error_input_invalid(w, message)
}

/// See [`Dispatcher::error_already_exists`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn error_already_exists<W: ResponseWriter + ?Sized>(
    w: &mut W,
    message: impl Into<String>,
) -> Result<(), WriteError> {
    Dispatcher::global().error_already_exists(w, message)
}

/// See [`Dispatcher::error_input_invalid_with_id`].
///
/// # Errors
///
/// Returns an error if the transport rejects the body.
pub fn error_input_invalid_with_id<W: ResponseWriter + ?Sized>(
    w: &mut W,
    message: impl Into<String>,
    id: i64,
) -> Result<(), WriteError> {
    Dispatcher::global().error_input_invalid_with_id(w, message, id)
}
