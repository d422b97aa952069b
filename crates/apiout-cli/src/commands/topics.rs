// Rust guideline compliant 2026-10-16

//! Implementation of the `apiout topics` command.

use apiout_core::MessageType;

/// Lists the predefined message types, one per line.
pub fn execute() -> String {
    MessageType::well_known()
        .iter()
        .map(|topic| format!("{topic}\n"))
        .collect()
}
