//! Monetary amounts held as integer minor units (cents). Floats only appear at the
//! JSON boundary: request values are converted with `from_major_units`, balances
//! are rendered back as major units.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of minor units in one major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Tolerance when checking that a scaled float is a whole number of cents.
/// `0.1 * 100.0` is `10.000000000000002`, which must still count as 10 cents.
const SCALE_EPSILON: f64 = 1e-6;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount must be a finite number")]
    NotFinite,
    #[error("amount has more than two decimal places")]
    TooPrecise,
    #[error("amount is out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts a decimal amount in major units (e.g. `12.34`) into cents.
    pub fn from_major_units(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        let scaled = value * MINOR_PER_MAJOR as f64;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > SCALE_EPSILON {
            return Err(MoneyError::TooPrecise);
        }
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
            return Err(MoneyError::OutOfRange);
        }
        Ok(Money(rounded as i64))
    }

    pub fn as_major_units(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / per, abs % per)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_and_fractional_major_units() {
        assert_eq!(Money::from_major_units(100.0), Ok(Money::from_minor(10_000)));
        assert_eq!(Money::from_major_units(12.34), Ok(Money::from_minor(1_234)));
        assert_eq!(Money::from_major_units(0.1), Ok(Money::from_minor(10)));
        assert_eq!(Money::from_major_units(0.29), Ok(Money::from_minor(29)));
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert_eq!(Money::from_major_units(1.234), Err(MoneyError::TooPrecise));
        assert_eq!(Money::from_major_units(0.001), Err(MoneyError::TooPrecise));
    }

    #[test]
    fn rejects_non_finite_and_huge_values() {
        assert_eq!(Money::from_major_units(f64::NAN), Err(MoneyError::NotFinite));
        assert_eq!(Money::from_major_units(f64::INFINITY), Err(MoneyError::NotFinite));
        assert_eq!(Money::from_major_units(1e18), Err(MoneyError::OutOfRange));
    }

    #[test]
    fn negative_values_convert_but_are_not_positive() {
        let m = Money::from_major_units(-5.0).unwrap();
        assert_eq!(m.minor_units(), -500);
        assert!(!m.is_positive());
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn checked_arithmetic_detects_overflow() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.checked_add(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_minor(70).checked_sub(Money::from_minor(30)),
            Some(Money::from_minor(40))
        );
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_minor(7_000).to_string(), "70.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
    }

    #[test]
    fn serializes_as_major_unit_number() {
        let json = serde_json::to_value(Money::from_minor(7_050)).unwrap();
        assert_eq!(json, serde_json::json!(70.5));
    }
}
