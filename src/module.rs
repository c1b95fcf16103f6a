//! The money serialization module
//!
//! A `MoneyModule` is the unit of configuration a serializer registers to
//! learn how monetary amounts look on the wire. It is immutable once built;
//! the builder methods consume and return the module.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::money::{MoneyError, MoneyResult};

/// Registration identity shared by every `MoneyModule`
pub const MODULE_NAME: &str = "MoneyModule";

pub const DEFAULT_AMOUNT_FIELD_NAME: &str = "amount";
pub const DEFAULT_CURRENCY_FIELD_NAME: &str = "currency";
pub const DEFAULT_FORMATTED_FIELD_NAME: &str = "formatted";

/// Whether a human-readable rendering is written next to the amount
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatting {
    /// Only the amount and currency fields are written
    #[default]
    None,
    /// Adds a formatted field such as `"29.95 EUR"`
    Default,
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatting::None => write!(f, "none"),
            Formatting::Default => write!(f, "default"),
        }
    }
}

/// Serialization module for monetary amounts
///
/// Also the shape of the module's configuration file; every key is optional:
///
/// ```yaml
/// quoted_decimal_numbers: true
/// amount_field_name: amount
/// currency_field_name: currency
/// formatting: default
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoneyModule {
    /// Name of the magnitude field
    amount_field_name: String,

    /// Name of the currency code field
    currency_field_name: String,

    /// Name of the formatted field, written only when formatting is enabled
    formatted_field_name: String,

    /// Write magnitudes as quoted strings and accept only quoted input
    quoted_decimal_numbers: bool,

    formatting: Formatting,
}

impl Default for MoneyModule {
    fn default() -> Self {
        Self {
            amount_field_name: DEFAULT_AMOUNT_FIELD_NAME.to_string(),
            currency_field_name: DEFAULT_CURRENCY_FIELD_NAME.to_string(),
            formatted_field_name: DEFAULT_FORMATTED_FIELD_NAME.to_string(),
            quoted_decimal_numbers: false,
            formatting: Formatting::None,
        }
    }
}

impl MoneyModule {
    /// Create a module with default options: numeric magnitudes, no formatting
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoted_decimal_numbers(mut self) -> Self {
        self.quoted_decimal_numbers = true;
        self
    }

    pub fn with_numeric_decimal_numbers(mut self) -> Self {
        self.quoted_decimal_numbers = false;
        self
    }

    pub fn with_amount_field_name(mut self, name: impl Into<String>) -> Self {
        self.amount_field_name = name.into();
        self
    }

    pub fn with_currency_field_name(mut self, name: impl Into<String>) -> Self {
        self.currency_field_name = name.into();
        self
    }

    pub fn with_formatted_field_name(mut self, name: impl Into<String>) -> Self {
        self.formatted_field_name = name.into();
        self
    }

    pub fn with_default_formatting(mut self) -> Self {
        self.formatting = Formatting::Default;
        self
    }

    pub fn without_formatting(mut self) -> Self {
        self.formatting = Formatting::None;
        self
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn amount_field_name(&self) -> &str {
        &self.amount_field_name
    }

    pub fn currency_field_name(&self) -> &str {
        &self.currency_field_name
    }

    pub fn formatted_field_name(&self) -> &str {
        &self.formatted_field_name
    }

    pub fn quoted_decimal_numbers(&self) -> bool {
        self.quoted_decimal_numbers
    }

    pub fn formatting(&self) -> Formatting {
        self.formatting
    }

    /// Check that the field names can be told apart on input
    ///
    /// The formatted field name is checked even with formatting off, since
    /// readers still skip it.
    pub fn validate(&self) -> MoneyResult<()> {
        let fields = [
            ("amount", &self.amount_field_name),
            ("currency", &self.currency_field_name),
            ("formatted", &self.formatted_field_name),
        ];

        for (role, name) in fields {
            if name.is_empty() {
                return Err(MoneyError::InvalidModule(format!(
                    "{} field name must not be empty",
                    role
                )));
            }
        }

        for (i, (role, name)) in fields.iter().enumerate() {
            for (other_role, other_name) in &fields[i + 1..] {
                if name == other_name {
                    return Err(MoneyError::InvalidModule(format!(
                        "{} and {} fields share the name {:?}",
                        role, other_role, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Parse and validate a module description in YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let module: MoneyModule =
            serde_yaml::from_str(content).with_context(|| "Failed to parse money module YAML")?;
        module.validate()?;
        Ok(module)
    }

    /// Parse and validate a module description in JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let module: MoneyModule =
            serde_json::from_str(content).with_context(|| "Failed to parse money module JSON")?;
        module.validate()?;
        Ok(module)
    }

    /// Load a module description from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read money module file: {:?}", path))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let module = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };

        module.with_context(|| format!("Invalid money module file: {:?}", path))
    }
}
