use super::storage::KeyValueStorage;

// ── Admin Gate ───────────────────────────────────────────────────────────────
//
// A UI gate, not a credential system: the password is a plaintext constant
// compiled into the binary and compared byte for byte.  There is no hashing,
// rate limiting or lockout, and nothing below the UI enforces the flag.

/// Storage key of the persisted session flag.
pub const AUTH_STORAGE_KEY: &str = "admin-auth";

/// The only stored value that counts as "signed in".
pub const AUTH_SENTINEL: &str = "true";

/// Set at build time through `FOLIO_ADMIN_PASSWORD` (see build.rs).
pub const ADMIN_PASSWORD: &str = match option_env!("FOLIO_ADMIN_PASSWORD") {
    Some(password) => password,
    None => "admin123",
};

#[derive(Debug, Default)]
pub struct AuthGate {
    is_authenticated: bool,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Returns whether `password` matched.  A mismatch changes nothing, even
    /// when already signed in.
    pub fn login(&mut self, password: &str, storage: &mut impl KeyValueStorage) -> bool {
        if password.as_bytes() != ADMIN_PASSWORD.as_bytes() {
            tracing::info!("admin login rejected");
            return false;
        }

        self.is_authenticated = true;
        if let Err(e) = storage.set(AUTH_STORAGE_KEY, AUTH_SENTINEL) {
            tracing::warn!(error = %e, "signed in but could not persist the session flag");
        }
        tracing::info!("admin signed in");
        true
    }

    pub fn logout(&mut self, storage: &mut impl KeyValueStorage) {
        self.is_authenticated = false;
        if let Err(e) = storage.remove(AUTH_STORAGE_KEY) {
            tracing::warn!(error = %e, "signed out but could not clear the session flag");
        }
        tracing::info!("admin signed out");
    }

    pub fn restore_session(&mut self, storage: &impl KeyValueStorage) {
        self.is_authenticated = match storage.get(AUTH_STORAGE_KEY) {
            Ok(value) => value.as_deref() == Some(AUTH_SENTINEL),
            Err(e) => {
                tracing::warn!(error = %e, "could not read the session flag, starting signed out");
                false
            }
        };
        tracing::debug!(authenticated = self.is_authenticated, "session restored");
    }
}
