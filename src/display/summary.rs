//! Ledger summary formatting
//!
//! Renders a `LedgerSummary` as a table followed by the totals block.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::{double_separator, separator};
use crate::ledger::LedgerSummary;
use crate::models::{Entry, EntryKind, MoneyFormat};

const WIDTH: usize = 36;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Kolom")]
    column: &'static str,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Jumlah")]
    amount: String,
}

impl EntryRow {
    fn new(kind: EntryKind, entry: &Entry, fmt: &MoneyFormat) -> Self {
        Self {
            column: kind.heading(),
            label: entry.label.clone(),
            amount: fmt.format(entry.amount),
        }
    }
}

/// Format the entries of a summary as a table
pub fn format_entry_table(summary: &LedgerSummary, fmt: &MoneyFormat) -> String {
    let rows: Vec<EntryRow> = summary
        .incomes
        .iter()
        .map(|e| EntryRow::new(EntryKind::Income, e, fmt))
        .chain(
            summary
                .expenses
                .iter()
                .map(|e| EntryRow::new(EntryKind::Expense, e, fmt)),
        )
        .collect();

    if rows.is_empty() {
        return "No entries.".to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(2), Alignment::right())
        .to_string()
}

/// Format the full summary: entries, totals and what is left
pub fn format_summary(summary: &LedgerSummary, fmt: &MoneyFormat) -> String {
    let Some(budget) = summary.budget else {
        return "Budget not set; nothing to allocate.".to_string();
    };

    let line = |label: &str, value: String| format!("{:<14}{:>22}", label, value);

    let mut out = Vec::new();
    out.push(format_entry_table(summary, fmt));
    out.push(String::new());
    out.push(line("ANGGARAN", fmt.format(budget)));
    out.push(line("+ PEMASUKAN", fmt.format(summary.total_income)));
    out.push(line("- PENGELUARAN", fmt.format(summary.total_expense)));
    out.push(separator(WIDTH));
    out.push(line(summary.standing.label(), fmt.format(summary.remaining)));
    out.push(double_separator(WIDTH));
    out.push(summary.standing.headline().to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BudgetLedger;
    use crate::models::Money;

    #[test]
    fn test_empty_table() {
        let summary = BudgetLedger::with_budget(Money::from_units(1)).summary();
        assert_eq!(
            format_entry_table(&summary, &MoneyFormat::default()),
            "No entries."
        );
    }

    #[test]
    fn test_unset_budget_message() {
        let summary = BudgetLedger::new().summary();
        assert!(format_summary(&summary, &MoneyFormat::default()).contains("Budget not set"));
    }

    #[test]
    fn test_summary_contents() {
        let mut ledger = BudgetLedger::with_budget(Money::from_units(7_000_000));
        ledger
            .add_entry(EntryKind::Expense, "Rent", Some(Money::from_units(2_000_000)))
            .unwrap();
        ledger
            .add_entry(EntryKind::Income, "Bonus", Some(Money::from_units(500_000)))
            .unwrap();

        let text = format_summary(&ledger.summary(), &MoneyFormat::default());
        assert!(text.contains("Rent"));
        assert!(text.contains("2.000.000"));
        assert!(text.contains("PEMASUKAN"));
        assert!(text.contains("SISA"));
        assert!(text.contains("5.500.000"));
    }

    #[test]
    fn test_balanced_headline() {
        let mut ledger = BudgetLedger::with_budget(Money::from_units(1000));
        ledger
            .add_entry(EntryKind::Expense, "A", Some(Money::from_units(1000)))
            .unwrap();

        let text = format_summary(&ledger.summary(), &MoneyFormat::default());
        assert!(text.contains("PAS"));
        assert!(text.ends_with("SEMUA TERALOKASI"));
    }
}
