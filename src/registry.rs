//! Process-wide money module registry
//!
//! The host registers its module once during startup; any number of
//! serializations read it afterwards. Duplicate registrations are ignored,
//! keyed by module name, so the first registered module stays active.

use lazy_static::lazy_static;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::module::MoneyModule;
use crate::money::MoneyResult;

// Global money module that can be read from any serialization
lazy_static! {
    static ref GLOBAL_MONEY_MODULE: RwLock<Option<Arc<MoneyModule>>> = RwLock::new(None);
    static ref DEFAULT_MONEY_MODULE: Arc<MoneyModule> = Arc::new(MoneyModule::default());
}

/// Outcome of registering a module into a serializer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The module is now the active one
    Registered,
    /// A module was already active; the new one was ignored
    AlreadyRegistered,
}

/// Register a module into the process-wide registry
pub fn register(module: MoneyModule) -> MoneyResult<Registration> {
    let mut slot = GLOBAL_MONEY_MODULE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    install_into(&mut slot, module, "process-wide registry")
}

/// The registered module, if any
pub fn active_module() -> Option<Arc<MoneyModule>> {
    GLOBAL_MONEY_MODULE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The registered module, or the default module when none is registered
pub fn resolve() -> Arc<MoneyModule> {
    active_module().unwrap_or_else(|| DEFAULT_MONEY_MODULE.clone())
}

/// Install `module` into a single-module slot, first registration wins
pub(crate) fn install_into(
    slot: &mut Option<Arc<MoneyModule>>,
    module: MoneyModule,
    target: &str,
) -> MoneyResult<Registration> {
    module.validate()?;

    match slot.as_deref() {
        Some(existing) if *existing == module => {
            debug!("{} already registered in {}", module.name(), target);
            Ok(Registration::AlreadyRegistered)
        }
        Some(existing) => {
            warn!(
                "Ignoring {} registration in {}: a module with different options is active ({:?})",
                module.name(),
                target,
                existing
            );
            Ok(Registration::AlreadyRegistered)
        }
        None => {
            debug!(
                "Registered {} in {} (quoted decimals: {}, formatting: {})",
                module.name(),
                target,
                module.quoted_decimal_numbers(),
                module.formatting()
            );
            *slot = Some(Arc::new(module));
            Ok(Registration::Registered)
        }
    }
}
