//! Ledger entry model
//!
//! An entry is a labeled amount in either the income or the expense column.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Which column of the ledger an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Column heading shown in the form
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Income => "PEMASUKAN",
            Self::Expense => "PENGELUARAN",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A labeled amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Trimmed, non-empty label; unique within its column
    pub label: String,
    pub amount: Money,
}

impl Entry {
    /// Create an entry, trimming the label
    pub fn new(label: impl AsRef<str>, amount: Money) -> Self {
        Self {
            label: label.as_ref().trim().to_string(),
            amount,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.amount)
    }
}
