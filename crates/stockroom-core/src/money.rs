//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The product table stores price as decimal(18, 2):                      │
//! │    exactly two fractional digits, no rounding surprises                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    85.12 → 8512 cents, stored in an INTEGER column                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! On the wire a price is a plain JSON number (`85.12`), which is what API
//! clients expect from a decimal column. Form posts carry it as text
//! (`"85.12"`) and go through [`FromStr`].
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "85.12".parse().unwrap();
//! assert_eq!(price.cents(), 8512);
//! assert_eq!(price.to_string(), "85.12");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents (two fixed decimal places).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so validation can
///   reject them with a field error instead of a parse error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1200); // Represents 12.00
    /// assert_eq!(price.cents(), 1200);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(85, 12).cents(), 8512);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Rounds a floating point amount to the nearest cent.
    ///
    /// Only used when decoding JSON numbers; everything else stays integral.
    fn from_f64(amount: f64) -> Result<Self, MoneyParseError> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() > i64::MAX as f64 {
            return Err(MoneyParseError::OutOfRange);
        }
        Ok(Money(cents as i64))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a decimal string is not a valid price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    NotANumber(String),

    #[error("at most 2 decimal places are allowed")]
    TooManyDecimals,

    #[error("amount is out of range")]
    OutOfRange,
}

/// Parses `"85.12"`, `"12"`, `"12.5"` or `"-3.10"`.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if major.is_empty() || !all_digits(major) || !all_digits(minor) {
            return Err(MoneyParseError::NotANumber(s.to_string()));
        }
        if minor.len() > 2 {
            return Err(MoneyParseError::TooManyDecimals);
        }

        let major: i64 = major.parse().map_err(|_| MoneyParseError::OutOfRange)?;
        // "12.5" means 50 cents, not 5
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| MoneyParseError::OutOfRange)? * 10,
            _ => minor.parse().map_err(|_| MoneyParseError::OutOfRange)?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(MoneyParseError::OutOfRange)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Always two decimals, no currency symbol: `85.12`, `12.00`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount with at most two fractional digits")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(MoneyParseError::OutOfRange))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(MoneyParseError::OutOfRange))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(8512);
        assert_eq!(money.cents(), 8512);
        assert_eq!(money.dollars(), 85);
        assert_eq!(money.cents_part(), 12);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(12, 0).cents(), 1200);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(8512).to_string(), "85.12");
        assert_eq!(Money::from_cents(1200).to_string(), "12.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!("85.12".parse::<Money>().unwrap().cents(), 8512);
        assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("12.5".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!(" 0.07 ".parse::<Money>().unwrap().cents(), 7);
        assert_eq!("-3.10".parse::<Money>().unwrap().cents(), -310);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("1.234".parse::<Money>(), Err(MoneyParseError::TooManyDecimals));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyParseError::NotANumber(_))));
        assert!(matches!(".50".parse::<Money>(), Err(MoneyParseError::NotANumber(_))));
        assert!(matches!("1e3".parse::<Money>(), Err(MoneyParseError::NotANumber(_))));
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::OutOfRange)
        );
    }

    #[test]
    fn test_json_number_round_trip() {
        let json = serde_json::to_string(&Money::from_cents(8512)).unwrap();
        assert_eq!(json, "85.12");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 8512);
    }

    #[test]
    fn test_json_accepts_integers_and_strings() {
        let whole: Money = serde_json::from_str("12").unwrap();
        assert_eq!(whole.cents(), 1200);

        let text: Money = serde_json::from_str("\"12.34\"").unwrap();
        assert_eq!(text.cents(), 1234);

        assert!(serde_json::from_str::<Money>("\"1.999\"").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert!((b - a).is_negative());
        assert!(Money::default().is_zero());
    }
}
