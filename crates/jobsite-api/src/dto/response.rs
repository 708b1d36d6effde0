//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jobsite_core::types::CompanyId;
use jobsite_entity::{AdminIdentity, Company, ContractorIdentity};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Successful admin login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    /// Always `true`.
    pub success: bool,
    /// The admin snapshot embedded in the token.
    pub admin: AdminIdentity,
    /// Session token, also set as the admin cookie.
    pub token: String,
    /// Always `true`.
    pub is_admin: bool,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Successful contractor login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorLoginResponse {
    /// Always `true`.
    pub success: bool,
    /// The contractor snapshot embedded in the token.
    pub contractor: ContractorIdentity,
    /// Session token, also set as the contractor cookie.
    pub token: String,
    /// Always `false`.
    pub is_admin: bool,
    /// Whether the contractor holds the foreman capability.
    pub is_foreman: bool,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// The caller's current session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse<T: Serialize> {
    /// Identity snapshot.
    pub identity: T,
    /// Company the session is bound to.
    pub company_id: CompanyId,
    /// The company record, when the store has one.
    pub company: Option<Company>,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// Capability names.
    pub capabilities: Vec<&'static str>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// The message.
    pub message: String,
}
