//! Admin session gate persisted in the `adminAuthenticated` slot.
//!
//! Two states, no expiry: the slot holds the text `true` while logged in
//! and is absent otherwise. The credential check is a placeholder gate
//! against casual use, not a security boundary - no hashing, no rate
//! limiting.

use anyhow::Result;
use tracing::debug;

use crate::config::AdminCredentials;
use crate::error::AuthError;
use crate::fs::slots::{StorageArea, AUTH_SLOT};

/// Slot value meaning "logged in". Any other value (or an absent slot)
/// means logged out.
const AUTH_FLAG: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Read the current state from the storage area. A read failure gates
    /// closed.
    pub fn current(area: &StorageArea) -> Self {
        match area.read(AUTH_SLOT) {
            Ok(Some(value)) if value.trim() == AUTH_FLAG => SessionState::LoggedIn,
            _ => SessionState::LoggedOut,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::LoggedOut => write!(f, "logged out"),
            SessionState::LoggedIn => write!(f, "logged in"),
        }
    }
}

/// Transition to LoggedIn on an exact credential match; on a mismatch the
/// flag is left untouched.
pub fn login(
    area: &StorageArea,
    creds: &AdminCredentials,
    username: &str,
    password: &str,
) -> Result<SessionState> {
    if username != creds.username || password != creds.password {
        return Err(AuthError::InvalidCredentials.into());
    }

    area.write(AUTH_SLOT, AUTH_FLAG)?;
    debug!("admin session opened");
    Ok(SessionState::LoggedIn)
}

/// Transition to LoggedOut by clearing the flag. Idempotent.
pub fn logout(area: &StorageArea) -> Result<SessionState> {
    area.remove(AUTH_SLOT)?;
    debug!("admin session closed");
    Ok(SessionState::LoggedOut)
}

/// Guard for dashboard operations: they are only available while the
/// session flag is set.
pub fn require_login(area: &StorageArea) -> Result<(), AuthError> {
    match SessionState::current(area) {
        SessionState::LoggedIn => Ok(()),
        SessionState::LoggedOut => Err(AuthError::NotLoggedIn),
    }
}
