//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobsite_core::error::AppError;
use jobsite_core::types::CompanyId;

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    /// Employee ID.
    #[serde(default)]
    #[validate(length(min = 1, message = "Employee ID is required"))]
    pub employee_id: String,
    /// PIN.
    #[serde(default)]
    #[validate(length(min = 1, message = "PIN is required"))]
    pub pin: String,
}

/// Contractor login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContractorLoginRequest {
    /// Employee ID.
    #[serde(default)]
    #[validate(length(min = 1, message = "Employee ID is required"))]
    pub employee_id: String,
    /// PIN.
    #[serde(default)]
    #[validate(length(min = 1, message = "PIN is required"))]
    pub pin: String,
    /// Company, required when the employee ID exists in several companies.
    #[serde(default)]
    pub company_id: Option<CompanyId>,
}

/// Token namespace selector for shared routes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTypeQuery {
    /// `admin` or `contractor`; absent means `contractor`.
    pub auth_type: Option<String>,
}

/// Runs `validator` rules and maps failures to a validation error.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}
