//! Startup provider for the monetary codec
//!
//! The host's bootstrap asks for the money module here and registers it
//! before any amount is serialized.

use tracing::info;

use crate::module::MoneyModule;
use crate::money::MoneyResult;
use crate::registry::{self, Registration};

/// The money module the application serializes with: magnitudes as quoted decimal strings
pub fn provide_monetary_module() -> MoneyModule {
    MoneyModule::new().with_quoted_decimal_numbers()
}

/// Register the provided module into the process-wide registry
///
/// Call once during startup. Later calls are harmless no-ops.
pub fn install() -> MoneyResult<Registration> {
    let registration = registry::register(provide_monetary_module())?;
    if registration == Registration::Registered {
        info!("Installed money module with quoted decimal numbers");
    }
    Ok(registration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Formatting;

    #[test]
    fn test_provided_module_quotes_decimals() {
        let module = provide_monetary_module();
        assert!(module.quoted_decimal_numbers());
        assert_eq!(module.formatting(), Formatting::None);
        assert_eq!(module.amount_field_name(), "amount");
        assert_eq!(module.currency_field_name(), "currency");
        assert_eq!(module, provide_monetary_module(), "every call yields the same configuration");
    }

    #[test]
    fn test_install_is_idempotent() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        install().unwrap();
        assert_eq!(install().unwrap(), Registration::AlreadyRegistered);

        let active = registry::active_module().unwrap();
        assert_eq!(*active, provide_monetary_module());
    }
}
