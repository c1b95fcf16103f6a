//! monetary-json: quoted-decimal JSON codec for monetary amounts
//!
//! This library provides the money serialization module an application
//! registers at startup so that every monetary amount is written to and read
//! from JSON as `{"amount": "19.99", "currency": "USD"}`.

pub mod codec;
pub mod mapper;
pub mod module;
pub mod money;
pub mod provider;
pub mod registry;
pub mod serde_utils;

pub use mapper::JsonMapper;
pub use module::{Formatting, MoneyModule};
pub use money::{CurrencyUnit, MonetaryAmount, MoneyError, MoneyResult};
pub use provider::{install, provide_monetary_module};
pub use registry::Registration;
