// Rust guideline compliant 2026-10-16

//! apiout CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod render;

pub use logging::{init_tracing, parse_log_level, LogOptions};
pub use render::{parse_data, render_response};
