//! Dialog components for the TUI

pub mod entry;
