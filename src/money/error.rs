//! Error types for monetary values

use thiserror::Error;

use crate::money::CurrencyUnit;

/// Errors that can occur when building, combining or configuring monetary values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Currency code that is not an active ISO 4217 code
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Text that is not a plain decimal literal
    #[error("Invalid decimal literal: {0:?}")]
    InvalidDecimal(String),

    /// Arithmetic between amounts in different currencies
    #[error("Currency mismatch: {left} and {right}")]
    CurrencyMismatch {
        left: CurrencyUnit,
        right: CurrencyUnit,
    },

    /// Decimal arithmetic overflow
    #[error("Arithmetic overflow")]
    Overflow,

    /// Module options that cannot produce a readable wire format
    #[error("Invalid module configuration: {0}")]
    InvalidModule(String),
}

/// Result type for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
