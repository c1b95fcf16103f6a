//! JSON mapper
//!
//! A `JsonMapper` is one serializer instance with its own money module slot.
//! Its entry points mirror `serde_json`'s and return `serde_json` errors
//! unchanged; the mapper only decides which module is active while they run.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::codec::ModuleScope;
use crate::module::MoneyModule;
use crate::money::MoneyResult;
use crate::registry::{install_into, Registration};

/// Serializer instance holding at most one money module
///
/// Without a module of its own the mapper uses the process-wide one.
/// Cloning is cheap and clones share the registered module.
#[derive(Clone, Debug, Default)]
pub struct JsonMapper {
    money_module: Option<Arc<MoneyModule>>,
}

impl JsonMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with `module` registered
    pub fn with_module(module: MoneyModule) -> MoneyResult<Self> {
        let mut mapper = Self::new();
        mapper.register_module(module)?;
        Ok(mapper)
    }

    /// Register a money module; a second registration is ignored
    pub fn register_module(&mut self, module: MoneyModule) -> MoneyResult<Registration> {
        install_into(&mut self.money_module, module, "json mapper")
    }

    /// The module registered on this mapper, if any
    pub fn module(&self) -> Option<&MoneyModule> {
        self.money_module.as_deref()
    }

    fn scope(&self) -> Option<ModuleScope> {
        self.money_module.clone().map(ModuleScope::enter)
    }

    pub fn to_string<T>(&self, value: &T) -> serde_json::Result<String>
    where
        T: ?Sized + Serialize,
    {
        let _scope = self.scope();
        serde_json::to_string(value)
    }

    pub fn to_string_pretty<T>(&self, value: &T) -> serde_json::Result<String>
    where
        T: ?Sized + Serialize,
    {
        let _scope = self.scope();
        serde_json::to_string_pretty(value)
    }

    pub fn to_vec<T>(&self, value: &T) -> serde_json::Result<Vec<u8>>
    where
        T: ?Sized + Serialize,
    {
        let _scope = self.scope();
        serde_json::to_vec(value)
    }

    pub fn to_value<T>(&self, value: &T) -> serde_json::Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let _scope = self.scope();
        serde_json::to_value(value)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str<'a, T>(&self, s: &'a str) -> serde_json::Result<T>
    where
        T: Deserialize<'a>,
    {
        let _scope = self.scope();
        serde_json::from_str(s)
    }

    pub fn from_slice<'a, T>(&self, v: &'a [u8]) -> serde_json::Result<T>
    where
        T: Deserialize<'a>,
    {
        let _scope = self.scope();
        serde_json::from_slice(v)
    }

    pub fn from_value<T>(&self, value: Value) -> serde_json::Result<T>
    where
        T: DeserializeOwned,
    {
        let _scope = self.scope();
        serde_json::from_value(value)
    }
}
