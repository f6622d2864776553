//! Credential store.
//!
//! One process-wide store owns the bearer token and role tag for the
//! current session. Every authenticated call reads it at call time; only
//! the login/register success path, a role change, logout, or expiry
//! write it.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::types::Role;

/// The bearer token and role identifying the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    role: Role,
}

impl Credentials {
    /// Create credentials from a token and role.
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the role tag.
    pub fn role(&self) -> Role {
        self.role
    }
}

// Keep tokens out of debug/log output.
impl std::fmt::Display for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials(role={}, token=[REDACTED])", self.role)
    }
}

#[derive(Debug, Clone)]
struct StoredCredentials {
    credentials: Credentials,
    expires_at: DateTime<Utc>,
}

/// Application-wide credential storage with expiry.
///
/// Shared by reference between the client facade and the recovery
/// handler; reads are value copies, so concurrent readers observe a new
/// value the instant it is written. Storage failures (a poisoned lock)
/// surface as absent, never as a panic to the caller.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<Option<StoredCredentials>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store credentials with an absolute expiry computed from `ttl`.
    pub fn set(&self, credentials: Credentials, ttl: Duration) {
        let stored = StoredCredentials {
            credentials,
            expires_at: Utc::now() + ttl,
        };
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(stored);
        }
    }

    /// Returns the current credentials, or `None` when absent or expired.
    pub fn get(&self) -> Option<Credentials> {
        let guard = self.inner.read().ok()?;
        let stored = guard.as_ref()?;
        if stored.expires_at <= Utc::now() {
            return None;
        }
        Some(stored.credentials.clone())
    }

    /// Returns the current bearer token, honoring expiry.
    pub fn token(&self) -> Option<String> {
        self.get().map(|c| c.token)
    }

    /// Returns the current role tag, honoring expiry.
    pub fn role(&self) -> Option<Role> {
        self.get().map(|c| c.role)
    }

    /// Update the stored role, keeping the token and expiry.
    ///
    /// Used after the caller's own role changes server-side. A no-op when
    /// no unexpired credentials are stored.
    pub fn set_role(&self, role: Role) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(stored) = guard.as_mut() {
                stored.credentials.role = role;
            }
        }
    }

    /// Forces immediate expiry.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}
