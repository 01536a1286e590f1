//! Entry-editing session
//!
//! Tracks whether an add-entry form is open and holds its uncommitted draft.
//! Only confirming a draft touches the ledger.

use super::{AddOutcome, BudgetLedger};
use crate::error::LedgerError;
use crate::models::{format_money, parse_money, EntryKind, Money};

/// Which draft field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Label,
    Amount,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            Self::Label => Self::Amount,
            Self::Amount => Self::Label,
        }
    }
}

/// An entry that has not been committed yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub label: String,
    /// Amount as displayed, already in the locale format
    pub amount_input: String,
    pub focused: DraftField,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with both fields filled in
    pub fn filled(label: impl Into<String>, amount_input: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount_input: amount_input.into(),
            focused: DraftField::Label,
        }
    }

    /// The amount, or `None` while the field is empty or unreadable
    pub fn amount(&self) -> Option<Money> {
        Money::parse(&self.amount_input).ok()
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Type a character into the focused field
    ///
    /// The amount field only takes digits and is reformatted after every
    /// keystroke, so `1234` reads back as `1.234`.
    pub fn insert_char(&mut self, c: char) {
        match self.focused {
            DraftField::Label => self.label.push(c),
            DraftField::Amount => {
                if c.is_ascii_digit() {
                    self.amount_input.push(c);
                    self.reformat_amount();
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focused {
            DraftField::Label => {
                self.label.pop();
            }
            DraftField::Amount => {
                self.amount_input.pop();
                self.reformat_amount();
            }
        }
    }

    pub fn clear_field(&mut self) {
        match self.focused {
            DraftField::Label => self.label.clear(),
            DraftField::Amount => self.amount_input.clear(),
        }
    }

    fn reformat_amount(&mut self) {
        if self.amount_input.chars().any(|c| c.is_ascii_digit()) {
            self.amount_input = format_money(parse_money(&self.amount_input));
        } else {
            self.amount_input.clear();
        }
    }
}

/// Idle, or adding an entry to one of the columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntrySession {
    #[default]
    Idle,
    AddingExpense(Draft),
    AddingIncome(Draft),
}

impl EntrySession {
    /// Open an empty draft for a column, replacing any open draft
    pub fn begin(&mut self, kind: EntryKind) {
        *self = match kind {
            EntryKind::Income => Self::AddingIncome(Draft::new()),
            EntryKind::Expense => Self::AddingExpense(Draft::new()),
        };
    }

    /// Open a prepared draft for a column
    pub fn begin_with(&mut self, kind: EntryKind, draft: Draft) {
        *self = match kind {
            EntryKind::Income => Self::AddingIncome(draft),
            EntryKind::Expense => Self::AddingExpense(draft),
        };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Column the open draft targets
    pub fn kind(&self) -> Option<EntryKind> {
        match self {
            Self::Idle => None,
            Self::AddingExpense(_) => Some(EntryKind::Expense),
            Self::AddingIncome(_) => Some(EntryKind::Income),
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle => None,
            Self::AddingExpense(draft) | Self::AddingIncome(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Self::Idle => None,
            Self::AddingExpense(draft) | Self::AddingIncome(draft) => Some(draft),
        }
    }

    /// Commit the draft to the ledger
    ///
    /// On success the session returns to idle. A rejected draft stays open
    /// so it can be corrected. Returns `Ok(None)` when no draft is open.
    pub fn confirm(
        &mut self,
        ledger: &mut BudgetLedger,
    ) -> Result<Option<AddOutcome>, LedgerError> {
        let (Some(kind), Some(draft)) = (self.kind(), self.draft()) else {
            return Ok(None);
        };

        let outcome = ledger.add_entry(kind, &draft.label, draft.amount())?;
        *self = Self::Idle;
        Ok(Some(outcome))
    }

    /// Discard the draft without touching the ledger
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidEntryReason;

    #[test]
    fn test_begin_opens_matching_draft() {
        let mut session = EntrySession::default();
        assert!(!session.is_open());

        session.begin(EntryKind::Income);
        assert_eq!(session.kind(), Some(EntryKind::Income));
        assert_eq!(session.draft(), Some(&Draft::new()));

        session.begin(EntryKind::Expense);
        assert_eq!(session, EntrySession::AddingExpense(Draft::new()));
    }

    #[test]
    fn test_confirm_commits_and_goes_idle() {
        let mut ledger = BudgetLedger::with_budget(Money::from_units(1000));
        let mut session = EntrySession::default();
        session.begin_with(EntryKind::Expense, Draft::filled("Food", "250"));

        let outcome = session.confirm(&mut ledger).unwrap();

        assert_eq!(outcome, Some(AddOutcome::Created));
        assert_eq!(session, EntrySession::Idle);
        assert_eq!(ledger.compute_remaining(), Money::from_units(750));
    }

    #[test]
    fn test_confirm_empty_label_keeps_draft_open() {
        let mut ledger = BudgetLedger::with_budget(Money::from_units(1000));
        let before = ledger.clone();
        let mut session = EntrySession::default();
        session.begin_with(EntryKind::Expense, Draft::filled("  ", "250"));

        let err = session.confirm(&mut ledger).unwrap_err();

        assert_eq!(err, LedgerError::InvalidEntry(InvalidEntryReason::EmptyLabel));
        assert_eq!(ledger, before);
        assert_eq!(
            session,
            EntrySession::AddingExpense(Draft::filled("  ", "250"))
        );
    }

    #[test]
    fn test_confirm_empty_amount_is_rejected() {
        let mut ledger = BudgetLedger::new();
        let mut session = EntrySession::default();
        session.begin_with(EntryKind::Income, Draft::filled("Bonus", ""));

        let err = session.confirm(&mut ledger).unwrap_err();

        assert_eq!(err, LedgerError::InvalidEntry(InvalidEntryReason::EmptyAmount));
        assert!(session.is_open());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_confirm_when_idle_does_nothing() {
        let mut ledger = BudgetLedger::new();
        let mut session = EntrySession::Idle;
        assert_eq!(session.confirm(&mut ledger), Ok(None));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut ledger = BudgetLedger::new();
        let mut session = EntrySession::default();
        session.begin_with(EntryKind::Expense, Draft::filled("Rent", "100"));

        session.cancel();

        assert_eq!(session, EntrySession::Idle);
        assert_eq!(session.confirm(&mut ledger), Ok(None));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_amount_field_reformats_as_typed() {
        let mut draft = Draft::new();
        draft.next_field();
        for c in "1234567".chars() {
            draft.insert_char(c);
        }
        assert_eq!(draft.amount_input, "1.234.567");

        draft.backspace();
        assert_eq!(draft.amount_input, "123.456");

        draft.insert_char('x');
        assert_eq!(draft.amount_input, "123.456");
        assert_eq!(draft.amount(), Some(Money::from_units(123_456)));
    }

    #[test]
    fn test_amount_field_empties_cleanly() {
        let mut draft = Draft::new();
        draft.focused = DraftField::Amount;
        draft.insert_char('7');
        draft.backspace();
        assert_eq!(draft.amount_input, "");
        assert_eq!(draft.amount(), None);
    }

    #[test]
    fn test_label_field_editing() {
        let mut draft = Draft::new();
        for c in "Rent".chars() {
            draft.insert_char(c);
        }
        draft.backspace();
        assert_eq!(draft.label, "Ren");

        draft.clear_field();
        assert!(draft.label.is_empty());
    }
}
