// Rust guideline compliant 2026-10-16

//! Command implementations for the apiout CLI.

pub mod error;
pub mod send;
pub mod success;
pub mod topics;
