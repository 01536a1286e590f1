//! Application state for the TUI
//!
//! The App struct owns the ledger and the entry session; every key handler
//! mutates the ledger through the methods here.

use crate::config::settings::Settings;
use crate::ledger::{AddOutcome, BudgetLedger, EntrySession};
use crate::models::{format_money, EntryKind, MoneyFormat};

/// Which part of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Budget,
    Incomes,
    Expenses,
}

impl FocusedPanel {
    /// Column shown by this panel, if it is a list
    pub fn kind(self) -> Option<EntryKind> {
        match self {
            Self::Budget => None,
            Self::Incomes => Some(EntryKind::Income),
            Self::Expenses => Some(EntryKind::Expense),
        }
    }

    fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Income => Self::Incomes,
            EntryKind::Expense => Self::Expenses,
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Budget => Self::Incomes,
            Self::Incomes => Self::Expenses,
            Self::Expenses => Self::Budget,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Budget => Self::Expenses,
            Self::Incomes => Self::Budget,
            Self::Expenses => Self::Incomes,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Format for amounts in lists and the footer
    pub money_format: MoneyFormat,

    /// The ledger being edited
    pub ledger: BudgetLedger,

    /// Open draft, if any
    pub session: EntrySession,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Budget field as displayed
    pub budget_input: String,

    /// Selected row in the income list
    pub selected_income_index: usize,

    /// Selected row in the expense list
    pub selected_expense_index: usize,

    /// Why the open draft was rejected
    pub draft_error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let mut ledger = BudgetLedger::new();
        if let Some(budget) = settings.default_budget {
            ledger.set_budget_amount(budget);
        }
        let budget_input = ledger.budget().map(format_money).unwrap_or_default();

        Self {
            settings,
            money_format: settings.money_format(),
            ledger,
            session: EntrySession::default(),
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            budget_input,
            selected_income_index: 0,
            selected_expense_index: 0,
            draft_error: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Type a digit into the budget field
    pub fn type_budget_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.budget_input.push(c);
            self.apply_budget_input();
        }
    }

    /// Delete the last character of the budget field
    pub fn budget_backspace(&mut self) {
        self.budget_input.pop();
        self.apply_budget_input();
    }

    /// Empty the budget field
    pub fn clear_budget(&mut self) {
        self.budget_input.clear();
        self.apply_budget_input();
    }

    // The field always shows the ledger's view of the budget, so typing
    // `1234` reads back as `1.234`.
    fn apply_budget_input(&mut self) {
        self.ledger.set_budget(&self.budget_input);
        self.budget_input = self.ledger.budget().map(format_money).unwrap_or_default();
        if !self.ledger.is_budget_set() {
            self.focused_panel = FocusedPanel::Budget;
        }
    }

    /// Move focus to the next panel; lists are only reachable with a budget
    pub fn focus_next(&mut self) {
        if self.ledger.is_budget_set() {
            self.focused_panel = self.focused_panel.next();
        }
    }

    /// Move focus to the previous panel
    pub fn focus_prev(&mut self) {
        if self.ledger.is_budget_set() {
            self.focused_panel = self.focused_panel.prev();
        }
    }

    /// Focus a specific panel
    pub fn focus(&mut self, panel: FocusedPanel) {
        if panel == FocusedPanel::Budget || self.ledger.is_budget_set() {
            self.focused_panel = panel;
        }
    }

    /// Selected row index for a column
    pub fn selected_index(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Income => self.selected_income_index,
            EntryKind::Expense => self.selected_expense_index,
        }
    }

    fn selected_index_mut(&mut self, kind: EntryKind) -> &mut usize {
        match kind {
            EntryKind::Income => &mut self.selected_income_index,
            EntryKind::Expense => &mut self.selected_expense_index,
        }
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        if let Some(kind) = self.focused_panel.kind() {
            let index = self.selected_index_mut(kind);
            *index = index.saturating_sub(1);
        }
    }

    /// Move selection down in the focused list
    pub fn move_down(&mut self) {
        if let Some(kind) = self.focused_panel.kind() {
            let len = self.ledger.entries(kind).len();
            let index = self.selected_index_mut(kind);
            if *index + 1 < len {
                *index += 1;
            }
        }
    }

    fn clamp_selection(&mut self, kind: EntryKind) {
        let len = self.ledger.entries(kind).len();
        let index = self.selected_index_mut(kind);
        *index = (*index).min(len.saturating_sub(1));
    }

    /// Open the add-entry form for a column
    pub fn begin_entry(&mut self, kind: EntryKind) {
        if !self.ledger.is_budget_set() {
            self.set_status("Isi anggaran dulu");
            return;
        }
        self.session.begin(kind);
        self.draft_error = None;
    }

    /// Commit the open draft
    ///
    /// A rejected draft stays open with the reason shown in the form.
    pub fn confirm_draft(&mut self) {
        let Some(kind) = self.session.kind() else {
            return;
        };
        let label = self
            .session
            .draft()
            .map(|d| d.label.trim().to_string())
            .unwrap_or_default();

        match self.session.confirm(&mut self.ledger) {
            Ok(Some(outcome)) => {
                self.draft_error = None;
                let total = self
                    .ledger
                    .get(kind, &label)
                    .map(|e| self.money_format.format(e.amount))
                    .unwrap_or_default();
                match outcome {
                    AddOutcome::Created => {
                        self.set_status(format!("Added {} '{}': {}", kind, label, total));
                    }
                    AddOutcome::ToppedUp { previous } => {
                        self.set_status(format!(
                            "Topped up {} '{}': {} -> {}",
                            kind,
                            label,
                            self.money_format.format(previous),
                            total
                        ));
                    }
                }
                self.focused_panel = FocusedPanel::for_kind(kind);
                let position = self
                    .ledger
                    .entries(kind)
                    .iter()
                    .position(|e| e.label == label);
                if let Some(pos) = position {
                    *self.selected_index_mut(kind) = pos;
                }
            }
            Ok(None) => {}
            Err(e) => {
                self.draft_error = Some(e.to_string());
            }
        }
    }

    /// Close the open draft without committing it
    pub fn cancel_draft(&mut self) {
        self.session.cancel();
        self.draft_error = None;
    }

    /// Remove the selected row of the focused list
    pub fn remove_selected(&mut self) {
        let Some(kind) = self.focused_panel.kind() else {
            return;
        };
        let index = self.selected_index(kind);
        let Some(label) = self.ledger.entries(kind).get(index).map(|e| e.label.clone()) else {
            return;
        };

        if let Some(removed) = self.ledger.remove(kind, &label) {
            self.set_status(format!("Removed {} '{}'", kind, removed.label));
        }
        self.clamp_selection(kind);
    }
}
