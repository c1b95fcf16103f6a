//! JSON codec for monetary amounts
//!
//! `MonetaryAmount` and `CurrencyUnit` implement serde's traits by consulting
//! the active `MoneyModule`: the module of the `JsonMapper` currently running
//! on this thread, else the process-wide registered module, else the default.

use rust_decimal::Decimal;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::module::{Formatting, MoneyModule};
use crate::money::{CurrencyUnit, MonetaryAmount};
use crate::registry;
use crate::serde_utils::{quoted_decimal, string_or_number};

thread_local! {
    static MODULE_SCOPE: RefCell<Vec<Arc<MoneyModule>>> = RefCell::new(Vec::new());
}

/// Makes a module the active one on this thread until dropped
///
/// Scopes nest, so a serializer invoked from inside another one's
/// serialization sees its own module.
pub(crate) struct ModuleScope {
    // Must be dropped on the thread that entered it
    _not_send: PhantomData<*const ()>,
}

impl ModuleScope {
    pub(crate) fn enter(module: Arc<MoneyModule>) -> Self {
        MODULE_SCOPE.with(|scope| scope.borrow_mut().push(module));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for ModuleScope {
    fn drop(&mut self) {
        MODULE_SCOPE.with(|scope| {
            scope.borrow_mut().pop();
        });
    }
}

/// The module that governs serialization on this thread right now
pub fn current_module() -> Arc<MoneyModule> {
    MODULE_SCOPE
        .with(|scope| scope.borrow().last().cloned())
        .unwrap_or_else(registry::resolve)
}

/// Human-readable rendering written to the formatted field, e.g. `"29.95 EUR"`
pub(crate) fn format_amount(amount: &MonetaryAmount) -> String {
    amount.round_to_minor_units().to_string()
}

/// Magnitude as written under a given module
struct Magnitude<'a> {
    number: &'a Decimal,
    quoted: bool,
}

impl Serialize for Magnitude<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.quoted {
            quoted_decimal::serialize(self.number, serializer)
        } else {
            string_or_number::serialize(self.number, serializer)
        }
    }
}

/// Magnitude as read under a given module
struct MagnitudeSeed {
    quoted: bool,
}

impl<'de> DeserializeSeed<'de> for MagnitudeSeed {
    type Value = Decimal;

    fn deserialize<D>(self, deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        if self.quoted {
            quoted_decimal::deserialize(deserializer)
        } else {
            string_or_number::deserialize(deserializer)
        }
    }
}

impl Serialize for MonetaryAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let module = current_module();
        let formatted = match module.formatting() {
            Formatting::Default => Some(format_amount(self)),
            Formatting::None => None,
        };

        let mut map = serializer.serialize_map(Some(if formatted.is_some() { 3 } else { 2 }))?;
        map.serialize_entry(
            module.amount_field_name(),
            &Magnitude {
                number: &self.number_with_minor_units(),
                quoted: module.quoted_decimal_numbers(),
            },
        )?;
        map.serialize_entry(module.currency_field_name(), &self.currency())?;
        if let Some(formatted) = formatted {
            map.serialize_entry(module.formatted_field_name(), &formatted)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonetaryAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let module = current_module();
        deserializer.deserialize_map(MonetaryAmountVisitor { module: &module })
    }
}

struct MonetaryAmountVisitor<'m> {
    module: &'m MoneyModule,
}

impl<'de> Visitor<'de> for MonetaryAmountVisitor<'_> {
    type Value = MonetaryAmount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a monetary amount with `{}` and `{}` fields",
            self.module.amount_field_name(),
            self.module.currency_field_name()
        )
    }

    fn visit_map<A>(self, mut map: A) -> Result<MonetaryAmount, A::Error>
    where
        A: MapAccess<'de>,
    {
        let module = self.module;
        let mut number: Option<Decimal> = None;
        let mut currency: Option<CurrencyUnit> = None;
        let mut formatted_seen = false;

        while let Some(key) = map.next_key::<String>()? {
            if key == module.amount_field_name() {
                if number.is_some() {
                    return Err(duplicate_field(&key));
                }
                number = Some(map.next_value_seed(MagnitudeSeed {
                    quoted: module.quoted_decimal_numbers(),
                })?);
            } else if key == module.currency_field_name() {
                if currency.is_some() {
                    return Err(duplicate_field(&key));
                }
                currency = Some(map.next_value::<CurrencyUnit>()?);
            } else if key == module.formatted_field_name() {
                // Output only; the amount and currency fields are authoritative
                if formatted_seen {
                    return Err(duplicate_field(&key));
                }
                formatted_seen = true;
                map.next_value::<IgnoredAny>()?;
            } else {
                return Err(de::Error::custom(format!(
                    "unknown field `{}`, expected `{}`, `{}` or `{}`",
                    key,
                    module.amount_field_name(),
                    module.currency_field_name(),
                    module.formatted_field_name()
                )));
            }
        }

        let number = number.ok_or_else(|| missing_field(module.amount_field_name()))?;
        let currency = currency.ok_or_else(|| missing_field(module.currency_field_name()))?;
        Ok(MonetaryAmount::new(number, currency))
    }
}

fn duplicate_field<E: de::Error>(name: &str) -> E {
    E::custom(format!("duplicate field `{}`", name))
}

fn missing_field<E: de::Error>(name: &str) -> E {
    E::custom(format!("missing field `{}`", name))
}

impl Serialize for CurrencyUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CurrencyUnitVisitor;

        impl<'de> Visitor<'de> for CurrencyUnitVisitor {
            type Value = CurrencyUnit;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO 4217 currency code")
            }

            fn visit_str<E>(self, value: &str) -> Result<CurrencyUnit, E>
            where
                E: de::Error,
            {
                CurrencyUnit::of(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CurrencyUnitVisitor)
    }
}
