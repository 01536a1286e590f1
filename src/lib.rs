//! Alokasi - terminal budget allocator
//!
//! Enter a budget, list income and expense rows, and see what is left:
//! a surplus, a deficit, or everything allocated.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, entries and the standing classification
//! - `ledger`: The budget ledger and the entry-editing session
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `display`: Plain-text output for the CLI
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive form
//!
//! # Example
//!
//! ```rust
//! use alokasi::ledger::BudgetLedger;
//! use alokasi::models::{EntryKind, Money, Standing};
//!
//! let mut ledger = BudgetLedger::new();
//! ledger.set_budget("7.000.000");
//! ledger
//!     .add_entry(EntryKind::Expense, "Rent", Some(Money::from_units(2_000_000)))
//!     .unwrap();
//!
//! assert_eq!(ledger.compute_remaining(), Money::from_units(5_000_000));
//! assert_eq!(ledger.standing(), Standing::Surplus);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::{AlokasiError, AlokasiResult};
pub use ledger::BudgetLedger;
