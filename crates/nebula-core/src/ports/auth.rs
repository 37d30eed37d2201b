//! Admin authentication port.

/// Gate in front of the admin area.
///
/// Implementations never fail outward: a broken backend reads as
/// "not authenticated".
pub trait AuthGate: Send + Sync {
    /// Whether the current session holds the admin flag.
    fn is_authenticated(&self) -> bool;

    /// Check a password and set the session flag on success.
    fn login(&self, password: &str) -> bool;

    /// Clear the session flag.
    fn logout(&self);
}
