//! Display formatting for terminal output
//!
//! Plain-text rendering of ledger summaries for the CLI.

pub mod summary;

pub use summary::{format_entry_table, format_summary};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
