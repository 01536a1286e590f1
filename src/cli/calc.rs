//! One-shot ledger calculation
//!
//! Builds a ledger from command-line arguments and prints the result.

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{AlokasiError, AlokasiResult};
use crate::ledger::BudgetLedger;
use crate::models::{EntryKind, Money};

/// Output format for `calc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for `calc`
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Total budget (e.g., "7.000.000")
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Income entry as LABEL=AMOUNT; repeat to add more
    #[arg(short, long = "income", value_name = "LABEL=AMOUNT")]
    pub incomes: Vec<String>,

    /// Expense entry as LABEL=AMOUNT; repeat to add more
    #[arg(short, long = "expense", value_name = "LABEL=AMOUNT")]
    pub expenses: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Split `LABEL=AMOUNT`; the last `=` separates, so labels may contain one
pub fn parse_entry_arg(raw: &str) -> AlokasiResult<(String, Option<Money>)> {
    let (label, amount) = raw.rsplit_once('=').ok_or_else(|| {
        AlokasiError::Validation(format!("Expected LABEL=AMOUNT, got '{}'", raw))
    })?;
    Ok((label.to_string(), Money::parse(amount).ok()))
}

/// Build the ledger described by the arguments
pub fn build_ledger(settings: &Settings, args: &CalcArgs) -> AlokasiResult<BudgetLedger> {
    let mut ledger = BudgetLedger::new();
    match (&args.budget, settings.default_budget) {
        (Some(raw), _) => ledger.set_budget(raw),
        (None, Some(default)) => ledger.set_budget_amount(default),
        (None, None) => {}
    }

    let columns = [
        (EntryKind::Income, &args.incomes),
        (EntryKind::Expense, &args.expenses),
    ];
    for (kind, raws) in columns {
        for raw in raws {
            let (label, amount) = parse_entry_arg(raw)?;
            ledger.add_entry(kind, &label, amount)?;
        }
    }

    Ok(ledger)
}

/// Handle the `calc` command
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> AlokasiResult<()> {
    let ledger = build_ledger(settings, &args).inspect_err(|e| {
        if e.is_invalid_entry() {
            tracing::warn!(error = %e, "calc aborted on a rejected entry");
        }
    })?;
    let summary = ledger.summary();

    match args.format {
        OutputFormat::Table => {
            println!("{}", format_summary(&summary, &settings.money_format()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidEntryReason, LedgerError};

    fn args(budget: Option<&str>, incomes: &[&str], expenses: &[&str]) -> CalcArgs {
        CalcArgs {
            budget: budget.map(String::from),
            incomes: incomes.iter().map(|s| s.to_string()).collect(),
            expenses: expenses.iter().map(|s| s.to_string()).collect(),
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_parse_entry_arg() {
        assert_eq!(
            parse_entry_arg("Rent=2.000.000").unwrap(),
            ("Rent".to_string(), Some(Money::from_units(2_000_000)))
        );
        assert_eq!(
            parse_entry_arg("a=b=5").unwrap(),
            ("a=b".to_string(), Some(Money::from_units(5)))
        );
        assert_eq!(parse_entry_arg("Rent=").unwrap().1, None);
        assert!(parse_entry_arg("Rent").is_err());
    }

    #[test]
    fn test_build_ledger() {
        let ledger = build_ledger(
            &Settings::default(),
            &args(Some("7.000.000"), &["Bonus=500.000"], &["Rent=2.000.000"]),
        )
        .unwrap();

        assert_eq!(ledger.compute_remaining(), Money::from_units(5_500_000));
    }

    #[test]
    fn test_repeated_label_accumulates() {
        let ledger = build_ledger(
            &Settings::default(),
            &args(Some("1.000"), &[], &["A=600", "A=400"]),
        )
        .unwrap();

        assert_eq!(ledger.entries(EntryKind::Expense).len(), 1);
        assert!(ledger.compute_remaining().is_zero());
    }

    #[test]
    fn test_default_budget_from_settings() {
        let settings = Settings {
            default_budget: Some(Money::from_units(300)),
            ..Settings::default()
        };
        let ledger = build_ledger(&settings, &args(None, &[], &[])).unwrap();
        assert_eq!(ledger.budget(), Some(Money::from_units(300)));

        // an explicit budget wins
        let ledger = build_ledger(&settings, &args(Some("10"), &[], &[])).unwrap();
        assert_eq!(ledger.budget(), Some(Money::from_units(10)));
    }

    #[test]
    fn test_invalid_entry_is_error() {
        let err = build_ledger(&Settings::default(), &args(Some("10"), &[" =5"], &[]))
            .unwrap_err();
        assert!(matches!(
            err,
            AlokasiError::Ledger(LedgerError::InvalidEntry(InvalidEntryReason::EmptyLabel))
        ));
        assert!(err.is_invalid_entry());
    }

    #[test]
    fn test_out_of_range_amounts() {
        let ledger = build_ledger(
            &Settings::default(),
            &args(Some("92.233.720.368.547.758"), &[], &[]),
        )
        .unwrap();
        assert_eq!(ledger.budget(), None);

        let huge = "A=90.000.000.000.000.000";
        let err = build_ledger(&Settings::default(), &args(Some("1"), &[huge, huge], &[]))
            .unwrap_err();
        assert!(err.is_invalid_entry());
        assert_eq!(err.to_string(), "Invalid entry: amount is too large");
    }
}
