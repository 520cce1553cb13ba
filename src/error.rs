//! Error types for the auth gate and dashboard operations.
//!
//! Validation problems are not errors in this taxonomy - they are
//! reported field-by-field through `intake::ValidationReport` and never
//! abort with partial state. Storage read failures are recovered as an
//! empty store; storage write failures propagate as `anyhow` errors from
//! the fs layer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("admin login required (run 'rollcall admin login' first)")]
    NotLoggedIn,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The edit/delete target is not in the store. The store is left
    /// unchanged when this is returned.
    #[error("no enrollment found with id '{0}'")]
    NotFound(String),

    /// An edit left a core field empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}
