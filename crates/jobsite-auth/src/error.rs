//! Authentication and authorization failures.
//!
//! Every variant keeps its internal reason for the server log. On the way
//! out to a client, [`From<AuthError> for AppError`] collapses them to one
//! of three fixed messages so a response never reveals which check failed.

use thiserror::Error;

use jobsite_core::error::AppError;

use crate::principal::Capability;

/// Public message for any authentication-stage failure.
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
/// Public message for any authorization-stage failure.
pub const ACCESS_DENIED: &str = "Access denied";
/// Public message for a failed login.
pub const INVALID_LOGIN: &str = "Invalid employee ID or PIN";

/// Request lifecycle stage at which an [`AuthError`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    /// Identity could not be established (HTTP 401).
    Authentication,
    /// Identity was established but is not permitted (HTTP 403).
    Authorization,
}

/// The auth failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown identifier, wrong PIN, or ambiguous identifier at login.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Malformed token, bad signature, or inconsistent claims.
    #[error("invalid token")]
    InvalidToken,
    /// The token's expiry has passed.
    #[error("token expired")]
    TokenExpired,
    /// A token of the other namespace was presented.
    #[error("wrong role")]
    WrongRole,
    /// The resource belongs to another company.
    #[error("tenant mismatch")]
    TenantMismatch,
    /// The principal lacks the capability the route requires.
    #[error("missing capability {0}")]
    MissingCapability(Capability),
    /// No token was supplied.
    #[error("missing authentication")]
    MissingAuth,
}

impl AuthError {
    /// Returns the lifecycle stage of this failure.
    pub fn stage(&self) -> AuthStage {
        match self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::MissingAuth => AuthStage::Authentication,
            Self::WrongRole | Self::TenantMismatch | Self::MissingCapability(_) => {
                AuthStage::Authorization
            }
        }
    }

    /// Returns the message a client is allowed to see.
    pub fn public_message(&self) -> &'static str {
        match (self, self.stage()) {
            (Self::InvalidCredentials, _) => INVALID_LOGIN,
            (_, AuthStage::Authentication) => AUTHENTICATION_REQUIRED,
            (_, AuthStage::Authorization) => ACCESS_DENIED,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        tracing::info!(target: "audit", reason = %err, stage = ?err.stage(), "Auth request rejected");
        match err.stage() {
            AuthStage::Authentication => AppError::unauthorized(err.public_message()),
            AuthStage::Authorization => AppError::forbidden(err.public_message()),
        }
    }
}
