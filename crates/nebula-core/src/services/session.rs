//! Password gate backed by a session-scoped key-value slot.

use crate::error::DomainError;
use crate::ports::{AuthGate, KeyValueStore};

/// Slot holding the admin flag.
pub const SESSION_KEY: &str = "nebula_auth_session";

/// Password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

const FLAG_SET: &str = "true";

/// Single-password admin gate.
///
/// The flag lives in whatever store the session is given; pointing it at a
/// short-lived store scopes logins to that store's lifetime.
pub struct SessionAuth<K> {
    session: K,
    password: String,
}

impl<K: KeyValueStore> SessionAuth<K> {
    pub fn new(session: K, password: impl Into<String>) -> Self {
        Self {
            session,
            password: password.into(),
        }
    }
}

impl<K: KeyValueStore> AuthGate for SessionAuth<K> {
    fn is_authenticated(&self) -> bool {
        match self.session.get(SESSION_KEY) {
            Ok(flag) => flag.as_deref() == Some(FLAG_SET),
            Err(e) => {
                tracing::warn!(error = %e, "Session flag unreadable, treating as logged out");
                false
            }
        }
    }

    fn login(&self, password: &str) -> bool {
        if password != self.password {
            tracing::info!("Admin login rejected");
            return false;
        }

        match self.session.set(SESSION_KEY, FLAG_SET) {
            Ok(()) => {
                tracing::info!("Admin logged in");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to store session flag");
                false
            }
        }
    }

    fn logout(&self) {
        if let Err(e) = self.session.delete(SESSION_KEY) {
            tracing::warn!(error = %e, "Failed to clear session flag");
        }
    }
}

/// Fail with [`DomainError::Unauthorized`] unless the gate is open.
pub fn require_admin(gate: &dyn AuthGate) -> Result<(), DomainError> {
    if gate.is_authenticated() {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}
