//! Company (tenant) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::CompanyId;

/// A company. Owns every identity, credential, and business record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Legal or display name.
    pub name: String,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
}
