//! Pluggable [`WireClient`] construction. The driver crate itself has no
//! notion of how to reach a particular SQL server over the wire -- that
//! lives in whatever crate links against this one and calls
//! [`install_wire_client_factory`] before the first `SQLDriverConnect`.
//! Mirrors the registration pattern `log::set_logger` uses for the same
//! reason: a library crate can't hardcode a concrete backend, but still
//! needs a single global entry point the rest of the crate can call.

use odbc_driver_core::{ConnectionSettings, WireClient, WireError};
use std::sync::OnceLock;

type Factory = fn(&ConnectionSettings) -> Result<Box<dyn WireClient>, WireError>;

static FACTORY: OnceLock<Factory> = OnceLock::new();

/// Registers the function used to build a [`WireClient`] from parsed
/// connection settings. Must be called once, before any connection is
/// attempted; later calls are ignored.
pub fn install_wire_client_factory(factory: Factory) {
    let _ = FACTORY.set(factory);
}

/// Builds a [`WireClient`] for `settings` using the installed factory.
pub(crate) fn wire_client_for(
    settings: &ConnectionSettings,
) -> Result<Box<dyn WireClient>, WireError> {
    let factory = FACTORY
        .get()
        .ok_or_else(|| WireError::other("no wire client factory installed"))?;
    factory(settings)
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn wire_client_for_errors_without_a_registered_factory() {
        // FACTORY is process-global and may already be set by another test;
        // this only asserts the unset case behaves, so skip if occupied.
        if FACTORY.get().is_some() {
            return;
        }
        let settings = ConnectionSettings {
            driver: None,
            dsn: None,
            uid: "a".to_string(),
            pwd: "b".to_string(),
            database: None,
            role: None,
            charset: None,
            dialect: None,
            readonly: false,
            autoquoted: false,
            client: None,
            connsettings: None,
            write_result_as_diag: false,
            app_name: None,
            log_level: None,
        };
        assert!(wire_client_for(&settings).is_err());
    }
}
