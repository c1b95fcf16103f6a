//! Quoted decimal serialization/deserialization
//!
//! Decimals travel as JSON strings holding a plain literal (`"12.50"`), which
//! keeps the exact scale and avoids the binary rounding of JSON numbers.
//! Bare JSON numbers are rejected on input.

use rust_decimal::Decimal;
use serde::{Deserializer, Serializer};
use std::fmt;

use crate::money::decimal::{format_decimal_literal, parse_decimal_literal};

/// Deserialize a `Decimal` from a quoted plain literal only
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct QuotedDecimalVisitor;

    impl<'de> serde::de::Visitor<'de> for QuotedDecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a quoted decimal string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
        where
            E: serde::de::Error,
        {
            parse_decimal_literal(value).map_err(serde::de::Error::custom)
        }
    }

    deserializer.deserialize_str(QuotedDecimalVisitor)
}

/// Serialize a `Decimal` as a quoted plain literal, scale preserved
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_decimal_literal(value))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Premium {
        #[serde(with = "super")]
        monthly: Decimal,
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Premium { monthly: Decimal::new(1250, 2) }).unwrap();
        assert_eq!(json, r#"{"monthly":"12.50"}"#);
    }

    #[test]
    fn test_reads_quoted_literal() {
        let premium: Premium = serde_json::from_str(r#"{"monthly":"12.50"}"#).unwrap();
        assert_eq!(premium.monthly, Decimal::new(125, 1));
        assert_eq!(premium.monthly.to_string(), "12.50");
    }

    #[test]
    fn test_rejects_bare_number() {
        let err = serde_json::from_str::<Premium>(r#"{"monthly":12.50}"#).unwrap_err();
        assert!(
            err.to_string().contains("expected a quoted decimal string"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_rejects_exponent_and_garbage() {
        for body in [r#""1e2""#, r#""""#, r#""12,50""#, r#""twelve""#, "null", "[]"] {
            let json = format!(r#"{{"monthly":{body}}}"#);
            assert!(
                serde_json::from_str::<Premium>(&json).is_err(),
                "{json} should be rejected"
            );
        }
    }
}
