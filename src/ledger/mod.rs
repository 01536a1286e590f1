//! The budget ledger
//!
//! Owns the budget, the income column and the expense column. Every change
//! goes through the methods here; the remaining balance is recomputed on
//! each call rather than stored.

pub mod session;
pub mod summary;

pub use session::{Draft, DraftField, EntrySession};
pub use summary::LedgerSummary;

use tracing::{debug, trace};

use crate::error::{InvalidEntryReason, LedgerError};
use crate::models::{Entry, EntryKind, Money, Standing};

/// What an accepted entry did to its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new label was appended
    Created,
    /// The label existed; the amount was added to it
    ToppedUp { previous: Money },
}

/// In-memory record of budget, incomes and expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetLedger {
    budget: Option<Money>,
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
}

impl BudgetLedger {
    /// Create an empty ledger with no budget set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with a budget already entered
    pub fn with_budget(budget: Money) -> Self {
        let mut ledger = Self::new();
        ledger.set_budget_amount(budget);
        ledger
    }

    /// Set the budget from what the user typed
    ///
    /// Empty or unreadable input leaves the budget unset instead of failing.
    pub fn set_budget(&mut self, raw_input: &str) {
        match Money::parse(raw_input) {
            Ok(amount) => self.set_budget_amount(amount),
            Err(e) => {
                trace!(input = raw_input, error = %e, "budget input not readable, unsetting");
                self.clear_budget();
            }
        }
    }

    /// Set the budget to an amount; zero counts as not entered
    pub fn set_budget_amount(&mut self, amount: Money) {
        self.budget = if amount.is_zero() { None } else { Some(amount) };
        trace!(budget = ?self.budget, "budget updated");
    }

    /// Forget the budget
    pub fn clear_budget(&mut self) {
        self.budget = None;
    }

    /// The budget, if one has been entered
    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Whether a budget has been entered
    ///
    /// Front ends hide the entry lists and the remaining balance until this
    /// is true.
    pub fn is_budget_set(&self) -> bool {
        self.budget.is_some()
    }

    /// Entries of one column, in insertion order
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    /// Look up an entry by label
    pub fn get(&self, kind: EntryKind, label: &str) -> Option<&Entry> {
        let label = label.trim();
        self.entries(kind).iter().find(|e| e.label == label)
    }

    /// Add an entry, accumulating onto an existing label
    ///
    /// Fails with `InvalidEntry` and leaves the ledger untouched when the
    /// trimmed label is empty, the amount is missing, or the accumulated
    /// amount would not fit.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        label: &str,
        amount: Option<Money>,
    ) -> Result<AddOutcome, LedgerError> {
        let label = label.trim();
        if label.is_empty() {
            debug!(%kind, "rejected entry without a label");
            return Err(LedgerError::InvalidEntry(InvalidEntryReason::EmptyLabel));
        }
        let Some(amount) = amount else {
            debug!(%kind, label, "rejected entry without an amount");
            return Err(LedgerError::InvalidEntry(InvalidEntryReason::EmptyAmount));
        };

        let entries = self.entries_mut(kind);
        if let Some(existing) = entries.iter_mut().find(|e| e.label == label) {
            let previous = existing.amount;
            let Some(total) = previous.checked_add(amount) else {
                debug!(%kind, label, %previous, %amount, "rejected entry that overflows its row");
                return Err(LedgerError::InvalidEntry(InvalidEntryReason::Overflow));
            };
            existing.amount = total;
            debug!(%kind, label, %previous, total = %existing.amount, "topped up entry");
            Ok(AddOutcome::ToppedUp { previous })
        } else {
            entries.push(Entry::new(label, amount));
            debug!(%kind, label, %amount, "created entry");
            Ok(AddOutcome::Created)
        }
    }

    /// Add or accumulate an entry and return the updated column
    pub fn add_or_accumulate(
        &mut self,
        kind: EntryKind,
        label: &str,
        amount: Option<Money>,
    ) -> Result<&[Entry], LedgerError> {
        self.add_entry(kind, label, amount)?;
        Ok(self.entries(kind))
    }

    /// Remove an entry by label; absent labels are ignored
    pub fn remove(&mut self, kind: EntryKind, label: &str) -> Option<Entry> {
        let label = label.trim();
        let entries = self.entries_mut(kind);
        let index = entries.iter().position(|e| e.label == label)?;
        let removed = entries.remove(index);
        debug!(%kind, label, "removed entry");
        Some(removed)
    }

    /// Sum of one column
    pub fn total(&self, kind: EntryKind) -> Money {
        self.entries(kind).iter().map(|e| e.amount).sum()
    }

    /// Budget plus incomes minus expenses
    pub fn compute_remaining(&self) -> Money {
        self.budget.unwrap_or_default() + self.total(EntryKind::Income)
            - self.total(EntryKind::Expense)
    }

    /// Classification of the current remaining balance
    pub fn standing(&self) -> Standing {
        Standing::classify(self.compute_remaining())
    }

    /// Whether both columns are empty
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    /// Snapshot for display or export
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_ledger(self)
    }
}
