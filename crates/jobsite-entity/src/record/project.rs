//! Project entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::{CompanyId, ProjectId};

/// A job site project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Project name.
    pub name: String,
    /// Site address or description.
    pub location: Option<String>,
    /// Whether work is ongoing.
    pub active: bool,
}
