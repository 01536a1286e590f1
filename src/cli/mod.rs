//! CLI command handlers
//!
//! Bridges the clap argument parsing with the ledger.

pub mod calc;

pub use calc::{handle_calc_command, CalcArgs, OutputFormat};
