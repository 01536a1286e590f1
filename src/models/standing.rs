//! Classification of the remaining balance
//!
//! A pure function of the sign of the remaining amount; nothing is stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether the budget has money left, is short, or is fully allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Something left over
    Surplus,
    /// Spending exceeds budget plus income
    Deficit,
    /// Every unit is allocated
    Balanced,
}

impl Standing {
    /// Classify a remaining amount
    pub fn classify(value: Money) -> Self {
        if value.is_positive() {
            Self::Surplus
        } else if value.is_negative() {
            Self::Deficit
        } else {
            Self::Balanced
        }
    }

    /// Short label shown next to the amount
    pub fn label(&self) -> &'static str {
        match self {
            Self::Surplus => "SISA",
            Self::Deficit => "KURANG",
            Self::Balanced => "PAS",
        }
    }

    /// Longer message for the footer
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Surplus => "SISA",
            Self::Deficit => "KURANG",
            Self::Balanced => "SEMUA TERALOKASI",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_zero_is_balanced() {
        assert_eq!(Standing::classify(Money::zero()), Standing::Balanced);
    }

    #[test]
    fn test_classify_positive_is_surplus() {
        for cents in [1, 100, 550_000_000, i64::MAX] {
            assert_eq!(Standing::classify(Money::from_cents(cents)), Standing::Surplus);
        }
    }

    #[test]
    fn test_classify_negative_is_deficit() {
        for cents in [-1, -100, -550_000_000, i64::MIN] {
            assert_eq!(Standing::classify(Money::from_cents(cents)), Standing::Deficit);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Standing::Surplus.label(), "SISA");
        assert_eq!(Standing::Deficit.label(), "KURANG");
        assert_eq!(Standing::Balanced.label(), "PAS");
        assert_eq!(Standing::Balanced.headline(), "SEMUA TERALOKASI");
    }
}
