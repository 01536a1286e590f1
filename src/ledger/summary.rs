//! Serializable snapshot of a ledger

use serde::Serialize;

use super::BudgetLedger;
use crate::models::{Entry, EntryKind, Money, Standing};

/// Everything a front end needs to show the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub budget: Option<Money>,
    pub incomes: Vec<Entry>,
    pub expenses: Vec<Entry>,
    pub total_income: Money,
    pub total_expense: Money,
    pub remaining: Money,
    pub standing: Standing,
}

impl LedgerSummary {
    pub fn from_ledger(ledger: &BudgetLedger) -> Self {
        let remaining = ledger.compute_remaining();
        Self {
            budget: ledger.budget(),
            incomes: ledger.entries(EntryKind::Income).to_vec(),
            expenses: ledger.entries(EntryKind::Expense).to_vec(),
            total_income: ledger.total(EntryKind::Income),
            total_expense: ledger.total(EntryKind::Expense),
            remaining,
            standing: Standing::classify(remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals() {
        let mut ledger = BudgetLedger::with_budget(Money::from_units(1000));
        ledger
            .add_entry(EntryKind::Expense, "Rent", Some(Money::from_units(1200)))
            .unwrap();
        ledger
            .add_entry(EntryKind::Income, "Side job", Some(Money::from_units(100)))
            .unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.total_expense, Money::from_units(1200));
        assert_eq!(summary.total_income, Money::from_units(100));
        assert_eq!(summary.remaining, Money::from_units(-100));
        assert_eq!(summary.standing, Standing::Deficit);
    }

    #[test]
    fn test_summary_json_shape() {
        let ledger = BudgetLedger::with_budget(Money::from_units(5));
        let json = serde_json::to_value(ledger.summary()).unwrap();

        assert_eq!(json["budget"], 500);
        assert_eq!(json["standing"], "surplus");
        assert!(json["incomes"].as_array().unwrap().is_empty());
    }
}
