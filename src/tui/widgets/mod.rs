//! Custom widgets for the TUI

pub mod amount_input;

pub use amount_input::AmountInput;
