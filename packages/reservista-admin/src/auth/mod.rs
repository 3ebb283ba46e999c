//! Mock authentication against a fixed set of accounts.
//!
//! The signed-in user is persisted as JSON under [`AUTH_USER_KEY`] in a
//! [`SessionStorage`], so a [`FileStorage`] keeps the session across process
//! runs.

mod guard;
mod storage;

use chrono::{DateTime, Utc};
use reservista_core::{FixedLatency, Latency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Role;

pub use guard::{resolve, Route};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

/// Storage key of the signed-in user.
pub const AUTH_USER_KEY: &str = "reservistaAuthUser";

/// Password accepted for every mock account.
pub const MOCK_PASSWORD: &str = "password";

/// Authentication errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// E-mail or password left empty
    #[error("Email and password are required.")]
    MissingCredentials,

    /// Unknown account or wrong password
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Session could not be read or written
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Session user could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// The signed-in account as stored in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Simulated login round trip in milliseconds
    pub login_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { login_delay_ms: 500 }
    }
}

fn mock_accounts() -> Vec<SessionUser> {
    let now = Utc::now();
    vec![
        SessionUser {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            created_at: now,
        },
        SessionUser {
            id: "2".to_string(),
            name: "Staff User".to_string(),
            email: "staff@example.com".to_string(),
            role: Role::Staff,
            created_at: now,
        },
    ]
}

/// Logs users in and out against the mock accounts.
pub struct AuthService<S, L = FixedLatency> {
    storage: S,
    latency: L,
    accounts: Vec<SessionUser>,
}

impl<S: SessionStorage> AuthService<S, FixedLatency> {
    /// Creates a service that delays logins by `config.login_delay_ms`.
    pub fn new(storage: S, config: AuthConfig) -> Self {
        Self::with_latency(storage, FixedLatency::from_millis(config.login_delay_ms))
    }
}

impl<S: SessionStorage, L: Latency> AuthService<S, L> {
    /// Creates a service with an injected latency port.
    pub fn with_latency(storage: S, latency: L) -> Self {
        Self {
            storage,
            latency,
            accounts: mock_accounts(),
        }
    }

    /// Returns the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Signs in and stores the account in the session.
    ///
    /// # Errors
    /// [`AuthError::MissingCredentials`] if either value is empty,
    /// [`AuthError::InvalidCredentials`] for an unknown e-mail or wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        self.latency.pause().await;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self
            .accounts
            .iter()
            .find(|account| account.email == email)
            .filter(|_| password == MOCK_PASSWORD)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!("Rejected login for '{}'", email);
                AuthError::InvalidCredentials
            })?;

        let json = serde_json::to_string(&user).map_err(|e| AuthError::Serialization(e.to_string()))?;
        self.storage.set(AUTH_USER_KEY, &json)?;

        tracing::debug!("User '{}' signed in as {}", user.email, user.role);
        Ok(user)
    }

    /// Clears the session.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove(AUTH_USER_KEY)?;
        Ok(())
    }

    /// Returns the signed-in user, if any.
    ///
    /// Unreadable session data is discarded and treated as signed out.
    pub fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        let Some(json) = self.storage.get(AUTH_USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!("Failed to parse session user, clearing session: {}", e);
                self.storage.remove(AUTH_USER_KEY)?;
                Ok(None)
            }
        }
    }
}

impl<S, L> std::fmt::Debug for AuthService<S, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("accounts", &self.accounts.len())
            .finish_non_exhaustive()
    }
}
