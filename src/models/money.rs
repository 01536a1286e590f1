//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! precision issues. Display follows the Indonesian locale: `.` groups
//! thousands, `,` separates decimals, and amounts are shown with zero
//! decimals by default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Hundredths per whole unit
const SCALE: i64 = 100;

/// Highest display precision we can honor (we only store hundredths)
const MAX_PRECISION: u32 = 2;

/// Largest magnitude `parse` accepts; leaves room for rounding a unit
pub const MAX_CENTS: i64 = i64::MAX - SCALE;

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use alokasi::models::Money;
    /// let amount = Money::from_cents(150); // 1,50
    /// assert_eq!(amount.cents(), 150);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use alokasi::models::Money;
    /// let amount = Money::from_units(7_000_000);
    /// assert_eq!(amount.to_string(), "7.000.000");
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Round to whole units, halves away from zero
    pub const fn round_units(&self) -> i64 {
        // u64 holds |i64::MIN| plus the half step
        let magnitude = ((self.0.unsigned_abs() + SCALE as u64 / 2) / SCALE as u64) as i64;
        if self.0 < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Add, or `None` if the sum leaves the representable range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount using the default locale format
    ///
    /// Accepts formats: "1.234.567", "1.234,50", "Rp 10.000", "(500)", "-500"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        MoneyFormat::default().parse(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Nothing but whitespace was given
    #[error("Amount is empty")]
    Empty,

    /// No number could be read from the input
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

/// Locale contract for rendering and reading amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormat {
    /// Digits after the decimal separator (capped at 2)
    pub precision: u32,
    /// Thousands grouping separator
    pub thousands_separator: char,
    /// Decimal separator
    pub decimal_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            precision: 0,
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl MoneyFormat {
    /// Same separators with a different precision
    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Render an amount, rounding halves away from zero
    ///
    /// Rounding to zero precision is lossy: `1.499,99` renders as `1.500`.
    pub fn format(&self, amount: Money) -> String {
        let precision = self.precision.min(MAX_PRECISION);
        let step = 10_u64.pow(MAX_PRECISION - precision);
        let scaled = (amount.cents().unsigned_abs() + step / 2) / step;

        let divisor = 10_u64.pow(precision);
        let int_part = (scaled / divisor).to_string();
        let frac_part = scaled % divisor;

        let sep = self.thousands_separator.to_string();
        let grouped: String = int_part
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(&sep);

        let sign = if amount.is_negative() && scaled != 0 {
            "-"
        } else {
            ""
        };

        if precision == 0 {
            format!("{sign}{grouped}")
        } else {
            format!(
                "{sign}{grouped}{}{:0width$}",
                self.decimal_separator,
                frac_part,
                width = precision as usize
            )
        }
    }

    /// Read an amount back from its displayed form
    ///
    /// Everything except digits, `-` and the decimal separator is skipped,
    /// so grouping separators and currency prefixes are tolerated. A value
    /// wrapped in parentheses is negative. Digits past the second decimal
    /// are truncated.
    pub fn parse(&self, s: &str) -> Result<Money, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (bracketed, body) = match trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(inner) => (true, inner),
            None => (false, trimmed),
        };

        let cleaned: Vec<char> = body
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-' || *c == self.decimal_separator)
            .collect();

        let mut chars = cleaned.iter().peekable();
        let minus = chars.next_if_eq(&&'-').is_some();

        let mut int_digits = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
            int_digits.push(*c);
        }

        let mut frac_digits = String::new();
        if chars.next_if_eq(&&self.decimal_separator).is_some() {
            while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
                frac_digits.push(*c);
            }
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let units: i64 = if int_digits.is_empty() {
            0
        } else {
            int_digits
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
        };

        let frac: i64 = match frac_digits.len() {
            0 => 0,
            1 => frac_digits
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
                * 10,
            _ => frac_digits[..2]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?,
        };

        let cents = units
            .checked_mul(SCALE)
            .and_then(|c| c.checked_add(frac))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        let negative = minus != bracketed;
        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }
}

/// Render with zero decimals, `.` thousands and `,` decimals
pub fn format_money(amount: Money) -> String {
    MoneyFormat::default().format(amount)
}

/// Read a displayed amount; anything unreadable becomes zero
pub fn parse_money(display: &str) -> Money {
    MoneyFormat::default().parse(display).unwrap_or_default()
}
