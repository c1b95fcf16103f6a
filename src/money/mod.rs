//! Monetary value types
//!
//! This module defines the amount and currency types the JSON codec reads and
//! writes, along with the decimal literal grammar used on the wire.

mod amount;
mod currency;
pub mod decimal;
mod error;

pub use self::amount::MonetaryAmount;
pub use self::currency::CurrencyUnit;
pub use self::error::{MoneyError, MoneyResult};
