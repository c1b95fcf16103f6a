//! Monetary amounts

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::money::decimal::parse_decimal_literal;
use crate::money::{CurrencyUnit, MoneyError, MoneyResult};

/// A decimal magnitude paired with a currency unit
///
/// Equality is decimal equality on the magnitude, so `12.340 SEK` equals
/// `12.34 SEK`, while the written scale is still kept for serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonetaryAmount {
    number: Decimal,
    currency: CurrencyUnit,
}

impl MonetaryAmount {
    pub fn new(number: Decimal, currency: CurrencyUnit) -> Self {
        Self { number, currency }
    }

    /// Build an amount from a magnitude and a currency code, e.g. `of(price, "NOK")`
    pub fn of(number: Decimal, currency_code: &str) -> MoneyResult<Self> {
        Ok(Self::new(number, CurrencyUnit::of(currency_code)?))
    }

    /// Build an amount from a plain decimal literal and a currency code
    pub fn parse(number: &str, currency_code: &str) -> MoneyResult<Self> {
        let number = parse_decimal_literal(number)?;
        Self::of(number, currency_code)
    }

    /// The zero amount in a currency
    pub fn zero(currency: CurrencyUnit) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn number(&self) -> Decimal {
        self.number
    }

    pub fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.number.is_zero() && self.number.is_sign_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.number.is_zero() && self.number.is_sign_positive()
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.number, self.currency)
    }

    /// Add two amounts of the same currency
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.require_same_currency(other)?;
        self.number
            .checked_add(other.number)
            .map(|number| Self::new(number, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Subtract an amount of the same currency
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.require_same_currency(other)?;
        self.number
            .checked_sub(other.number)
            .map(|number| Self::new(number, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Scale the magnitude by a plain factor
    pub fn checked_mul(&self, factor: Decimal) -> MoneyResult<Self> {
        self.number
            .checked_mul(factor)
            .map(|number| Self::new(number, self.currency))
            .ok_or(MoneyError::Overflow)
    }

    /// Round half away from zero to the currency's minor units, padding the scale
    ///
    /// Units without minor units are returned unchanged.
    pub fn round_to_minor_units(&self) -> Self {
        match self.currency.default_fraction_digits() {
            Some(digits) => {
                let mut number = self
                    .number
                    .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
                number.rescale(digits);
                Self::new(number, self.currency)
            }
            None => *self,
        }
    }

    /// The magnitude with its scale raised to at least the currency's minor units
    ///
    /// `1 SEK` gives `1.00`, `1.005 SEK` keeps `1.005`. Units without minor
    /// units keep their scale.
    pub fn number_with_minor_units(&self) -> Decimal {
        let mut number = self.number;
        if let Some(digits) = self.currency.default_fraction_digits() {
            if number.scale() < digits {
                number.rescale(digits);
            }
        }
        number
    }

    fn require_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sek(number: &str) -> MonetaryAmount {
        MonetaryAmount::parse(number, "SEK").unwrap()
    }

    #[test]
    fn test_of_and_parse() {
        let amount = MonetaryAmount::of(Decimal::new(100, 2), "SEK").unwrap();
        assert_eq!(amount.number().to_string(), "1.00");
        assert_eq!(amount.currency().code(), "SEK");
        assert_eq!(amount, sek("1"));

        assert_eq!(
            MonetaryAmount::of(Decimal::ONE, "SOK"),
            Err(MoneyError::UnknownCurrency("SOK".to_string()))
        );
        assert_eq!(
            MonetaryAmount::parse("1e3", "SEK"),
            Err(MoneyError::InvalidDecimal("1e3".to_string()))
        );
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(sek("12.340"), sek("12.34"));
        assert_ne!(sek("12.34"), MonetaryAmount::parse("12.34", "NOK").unwrap());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(sek("0.00").is_zero());
        assert!(!sek("-0").is_negative(), "negative zero is still zero");
        assert!(sek("-0.01").is_negative());
        assert!(sek("0.01").is_positive());
        assert_eq!(sek("5").negate(), sek("-5"));
        assert!(MonetaryAmount::zero(CurrencyUnit::of("EUR").unwrap()).is_zero());
    }

    #[test]
    fn test_arithmetic_within_currency() {
        let gross = sek("129.00");
        let discount = sek("29.50");
        assert_eq!(gross.checked_sub(&discount).unwrap(), sek("99.5"));
        assert_eq!(gross.checked_add(&discount).unwrap(), sek("158.50"));
        assert_eq!(discount.checked_mul(Decimal::new(2, 0)).unwrap(), sek("59"));
    }

    #[test]
    fn test_arithmetic_rejects_mixed_currencies() {
        let nok = MonetaryAmount::parse("10", "NOK").unwrap();
        let err = sek("10").checked_add(&nok).unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch {
                left: CurrencyUnit::of("SEK").unwrap(),
                right: CurrencyUnit::of("NOK").unwrap(),
            }
        );
        assert_eq!(err.to_string(), "Currency mismatch: SEK and NOK");
        assert!(sek("10").checked_sub(&nok).is_err());
    }

    #[test]
    fn test_arithmetic_overflow() {
        let max = MonetaryAmount::new(Decimal::MAX, CurrencyUnit::of("USD").unwrap());
        assert_eq!(max.checked_add(&max), Err(MoneyError::Overflow));
        assert_eq!(max.checked_mul(Decimal::new(2, 0)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_round_to_minor_units() {
        assert_eq!(sek("29.995").round_to_minor_units().number().to_string(), "30.00");
        assert_eq!(sek("29.9").round_to_minor_units().number().to_string(), "29.90");
        assert_eq!(sek("-0.005").round_to_minor_units().number().to_string(), "-0.01");

        let yen = MonetaryAmount::parse("1000.5", "JPY").unwrap();
        assert_eq!(yen.round_to_minor_units().number().to_string(), "1001");

        let gold = MonetaryAmount::parse("1.23456", "XAU").unwrap();
        assert_eq!(gold.round_to_minor_units().number().to_string(), "1.23456");
    }

    #[test]
    fn test_number_with_minor_units_only_pads() {
        let one = MonetaryAmount::of(Decimal::ONE, "SEK").unwrap();
        assert_eq!(one.number_with_minor_units().to_string(), "1.00");
        assert_eq!(sek("1.005").number_with_minor_units().to_string(), "1.005");

        let yen = MonetaryAmount::of(Decimal::new(1000, 0), "JPY").unwrap();
        assert_eq!(yen.number_with_minor_units().to_string(), "1000");

        let gold = MonetaryAmount::parse("2", "XAU").unwrap();
        assert_eq!(gold.number_with_minor_units().to_string(), "2");
    }

    #[test]
    fn test_display() {
        assert_eq!(sek("1.00").to_string(), "1.00 SEK");
    }
}
