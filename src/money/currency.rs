//! ISO 4217 currency units

use iso_currency::Currency;
use std::fmt;
use std::str::FromStr;

use crate::money::{MoneyError, MoneyResult};

/// A currency unit identified by its ISO 4217 alphabetic code
///
/// Units are `Copy` and compare by code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyUnit(Currency);

impl CurrencyUnit {
    /// Look up a currency by its alphabetic code (case-sensitive, e.g. `"SEK"`)
    pub fn of(code: &str) -> MoneyResult<Self> {
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(MoneyError::UnknownCurrency(code.to_string()));
        }

        Currency::from_code(code)
            .map(CurrencyUnit)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// The three-letter alphabetic code
    pub fn code(&self) -> &'static str {
        self.0.code()
    }

    /// The three-digit numeric code
    pub fn numeric_code(&self) -> u16 {
        self.0.numeric()
    }

    /// Number of minor-unit digits, `None` for units without minor units
    /// (precious metals, funds, testing codes)
    pub fn default_fraction_digits(&self) -> Option<u32> {
        self.0.exponent().map(u32::from)
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyUnit {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}
