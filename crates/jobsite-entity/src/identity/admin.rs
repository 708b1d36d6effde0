//! Admin identity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::{CompanyId, IdentityId};

/// A company administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentity {
    /// Unique identity ID.
    pub id: IdentityId,
    /// Company this admin administers. Immutable after creation.
    pub company_id: CompanyId,
    /// Human-readable display name.
    pub display_name: String,
    /// Employee ID used at login.
    pub employee_id: String,
    /// UI locale (e.g. `en`, `es`).
    pub locale: String,
}
