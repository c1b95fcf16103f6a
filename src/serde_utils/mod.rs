//! Serialization utilities for decimal magnitudes
//!
//! Field-level codecs for `rust_decimal::Decimal`, used by the monetary codec
//! and usable directly with the module pattern:
//! `#[serde(with = "monetary_json::serde_utils::quoted_decimal")]`

pub mod quoted_decimal;
pub mod string_or_number;
