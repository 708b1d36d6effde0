//! Contractor identity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::{CompanyId, IdentityId};

/// A contractor working for a company. Foremen are contractors with
/// `is_foreman` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContractorIdentity {
    /// Unique identity ID.
    pub id: IdentityId,
    /// Employing company. Immutable after creation.
    pub company_id: CompanyId,
    /// Human-readable display name.
    pub display_name: String,
    /// Employee ID used at login.
    pub employee_id: String,
    /// Trade or job title.
    pub role: String,
    /// Grants the crew management surface.
    pub is_foreman: bool,
    /// UI locale (e.g. `en`, `es`).
    pub locale: String,
}
