//! # Money Types
//!
//! Currency and price types for strategy-cart.
//! Amounts are kept in the smallest currency unit so totals stay exact.

use crate::error::{OrderError, OrderResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    RUB,
    USD,
    EUR,
    JPY,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::RUB => "rub",
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::JPY => "jpy",
        }
    }

    /// Parse a currency code, case-insensitive
    pub fn parse(code: &str) -> OrderResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "rub" => Ok(Currency::RUB),
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            "jpy" => Ok(Currency::JPY),
            other => Err(OrderError::InvalidArgument(format!(
                "unsupported currency: {other}"
            ))),
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, the others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn multiplier(&self) -> i64 {
        10_i64.pow(self.decimal_places() as u32)
    }

    /// Convert a decimal amount to the smallest currency unit (kopecks, cents).
    ///
    /// NaN, infinities and amounts outside the `i64` range are rejected.
    pub fn to_smallest_unit(&self, amount: f64) -> OrderResult<i64> {
        let scaled = (amount * self.multiplier() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !scaled.is_finite() || scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(OrderError::InvalidArgument(format!(
                "amount {amount} is not representable in {self}"
            )));
        }
        Ok(scaled as i64)
    }

    fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "₽",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::JPY => "¥",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::RUB
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (kopecks for RUB)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from decimal amount
    pub fn new(amount: f64, currency: Currency) -> OrderResult<Self> {
        Ok(Self {
            amount: currency.to_smallest_unit(amount)?,
            currency,
        })
    }

    /// Create a price from smallest unit (kopecks, cents)
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Fail with `InvalidArgument` if the amount is below zero
    pub fn ensure_non_negative(&self, what: &str) -> OrderResult<()> {
        if self.is_negative() {
            return Err(OrderError::InvalidArgument(format!(
                "{what} must not be negative, got {self}"
            )));
        }
        Ok(())
    }

    /// Multiply by a quantity, failing on overflow
    pub fn checked_times(&self, quantity: u32) -> OrderResult<Self> {
        let amount = self
            .amount
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| {
                OrderError::InvalidArgument(format!("{self} × {quantity} overflows"))
            })?;
        Ok(Self::from_minor(amount, self.currency))
    }

    /// Add another price of the same currency, failing on overflow
    pub fn checked_add(&self, other: &Price) -> OrderResult<Self> {
        if self.currency != other.currency {
            return Err(OrderError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: other.currency.to_string(),
            });
        }
        let amount = self.amount.checked_add(other.amount).ok_or_else(|| {
            OrderError::InvalidArgument(format!("{self} + {other} overflows"))
        })?;
        Ok(Self::from_minor(amount, self.currency))
    }

    /// Format for display with the currency symbol (e.g., "₽1100.00")
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }
}

/// Plain decimal rendering without symbol, as used inside report messages.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return write!(f, "{}", self.amount);
        }
        let multiplier = self.currency.multiplier();
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let major = abs / multiplier as u64;
        let minor = abs % multiplier as u64;
        write!(f, "{sign}{major}.{minor:0places$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let rub = Currency::RUB;
        assert_eq!(rub.to_smallest_unit(10.99).unwrap(), 1099);

        let jpy = Currency::JPY;
        assert_eq!(jpy.to_smallest_unit(1000.0).unwrap(), 1000);
    }

    #[test]
    fn test_non_finite_and_huge_amounts_rejected() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e30, -1e30] {
            let err = Price::new(amount, Currency::RUB).unwrap_err();
            assert!(err.is_invalid_argument(), "{amount} accepted");
        }
        // 2^63 minor units is one past i64::MAX
        assert!(Currency::JPY.to_smallest_unit(9_223_372_036_854_775_808.0).is_err());
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse("RUB").unwrap(), Currency::RUB);
        assert_eq!(Currency::parse(" eur ").unwrap(), Currency::EUR);
        assert!(Currency::parse("xyz").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(Price::new(1100.0, Currency::RUB).unwrap().to_string(), "1100.00");
        assert_eq!(Price::new(990.5, Currency::RUB).unwrap().to_string(), "990.50");
        assert_eq!(Price::from_minor(-5, Currency::USD).to_string(), "-0.05");
        assert_eq!(Price::new(1000.0, Currency::JPY).unwrap().to_string(), "1000");
        assert_eq!(Price::new(29.99, Currency::USD).unwrap().display(), "$29.99");
    }

    #[test]
    fn test_checked_add_rejects_mixed_currency() {
        let rub = Price::new(1.0, Currency::RUB).unwrap();
        let usd = Price::new(1.0, Currency::USD).unwrap();
        assert!(matches!(
            rub.checked_add(&usd),
            Err(OrderError::CurrencyMismatch { .. })
        ));
        assert_eq!(rub.checked_add(&rub).unwrap().amount, 200);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let big = Price::from_minor(i64::MAX / 2 + 1, Currency::RUB);

        assert!(big.checked_times(3).unwrap_err().is_invalid_argument());
        assert!(big.checked_add(&big).unwrap_err().is_invalid_argument());
        assert_eq!(big.checked_times(1).unwrap(), big);
        assert_eq!(big.checked_times(0).unwrap().amount, 0);
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(Price::from_minor(0, Currency::RUB).ensure_non_negative("price").is_ok());
        let err = Price::from_minor(-1, Currency::RUB)
            .ensure_non_negative("price")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
