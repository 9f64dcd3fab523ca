//! Player login
//!
//! The game core never uses the token; a successful login only gates entry
//! to play.

use crate::error::AuthError;
use rand::RngCore;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{info, warn};

/// Opaque token handed out on successful login
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fresh random 128-bit token, hex encoded
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Verifies a username/password pair
pub trait Authenticator {
    /// # Errors
    /// Returns `AuthError` with a message suitable for showing to the player.
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionToken, AuthError>;
}

/// Checks credentials against a fixed set of accounts
#[derive(Debug, Clone, Default)]
pub struct AccountAuthenticator {
    accounts: FxHashMap<String, String>,
}

impl AccountAuthenticator {
    #[must_use]
    pub const fn new(accounts: FxHashMap<String, String>) -> Self {
        Self { accounts }
    }
}

impl Authenticator for AccountAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        match self.accounts.get(username) {
            Some(expected) if expected == password => {
                info!(user = username, "login succeeded");
                Ok(SessionToken::generate())
            }
            _ => {
                warn!(user = username, "login rejected");
                Err(AuthError::login_failed())
            }
        }
    }
}

/// Accepts any non-empty username; used when login is not required
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAuthenticator;

impl Authenticator for OpenAuthenticator {
    fn authenticate(&self, username: &str, _password: &str) -> Result<SessionToken, AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(SessionToken::generate())
    }
}
