//! String or number serialization/deserialization
//!
//! This module provides utilities for decimal values that can be
//! either strings or numbers in serialized form. It backs the money
//! module's numeric mode, which writes JSON numbers and accepts both.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::money::decimal::parse_decimal_literal;

/// Deserialize a value that could be either a decimal string or a number into a `Decimal`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumberVisitor;

    impl<'de> serde::de::Visitor<'de> for StringOrNumberVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            parse_decimal_literal(value).map_err(serde::de::Error::custom)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Decimal::from_f64(value).ok_or_else(|| {
                serde::de::Error::custom(format!("number {} is out of decimal range", value))
            })
        }

        fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }
    }

    deserializer.deserialize_any(StringOrNumberVisitor)
}

/// Serialize a decimal as a JSON number
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Without serde_json's arbitrary precision the number goes through f64
    let float_val = value.to_f64().ok_or_else(|| {
        serde::ser::Error::custom(format!("decimal {} has no f64 representation", value))
    })?;
    serializer.serialize_f64(float_val)
}
