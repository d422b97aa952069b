// Rust guideline compliant 2026-10-16

//! Message types (topics) used by clients to route responses.
//!
//! A message type is an open set: the well-known constants below cover the
//! common outcomes, and applications mint their own with [`MessageType::new`].
//! Nothing checks new topics against a registry, so keep them few and
//! documented.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Short descriptive label classifying a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageType(Cow<'static, str>);

impl MessageType {
    /// Returned with every error response.
    pub const ERROR: MessageType = MessageType::from_static("error");
    /// Data was inserted successfully.
    pub const INSERT_OK: MessageType = MessageType::from_static("insertOK");
    /// Data was updated successfully.
    pub const UPDATE_OK: MessageType = MessageType::from_static("updateOK");
    /// Data was deleted successfully.
    pub const DELETE_OK: MessageType = MessageType::from_static("deleteOK");
    /// Data was looked up and found.
    pub const DATA_FOUND: MessageType = MessageType::from_static("dataFound");

    /// Creates a message type from any string.
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Creates a message type from a static string in const context.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the topic text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the topic is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// All predefined topics, in declaration order.
    #[must_use]
    pub fn well_known() -> [MessageType; 5] {
        [
            Self::ERROR,
            Self::INSERT_OK,
            Self::UPDATE_OK,
            Self::DELETE_OK,
            Self::DATA_FOUND,
        ]
    }
}

impl Default for MessageType {
    /// A blank topic; the explicit dispatcher replaces it before sending.
    fn default() -> Self {
        Self::from_static("")
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for MessageType {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for MessageType {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
