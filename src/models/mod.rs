//! Core data models for Alokasi
//!
//! Money, ledger entries, and the classification of what is left over.

pub mod entry;
pub mod money;
pub mod standing;

pub use entry::{Entry, EntryKind};
pub use money::{format_money, parse_money, Money, MoneyFormat, MoneyParseError};
pub use standing::Standing;
