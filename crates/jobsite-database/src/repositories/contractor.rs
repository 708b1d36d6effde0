//! Contractor identity repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId};
use jobsite_entity::ContractorIdentity;

const COLUMNS: &str = "id, company_id, display_name, employee_id, role, is_foreman, locale";

/// Repository for contractor identities.
#[derive(Debug, Clone)]
pub struct ContractorRepository {
    pool: PgPool,
}

impl ContractorRepository {
    /// Create a new contractor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a contractor by identity ID.
    pub async fn find_by_id(&self, id: IdentityId) -> AppResult<Option<ContractorIdentity>> {
        sqlx::query_as::<_, ContractorIdentity>(&format!(
            "SELECT {COLUMNS} FROM contractors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find contractor", e))
    }

    /// List all contractors of a company, ordered by employee ID.
    pub async fn find_by_company(&self, company: CompanyId) -> AppResult<Vec<ContractorIdentity>> {
        sqlx::query_as::<_, ContractorIdentity>(&format!(
            "SELECT {COLUMNS} FROM contractors WHERE company_id = $1 ORDER BY employee_id"
        ))
        .bind(company)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contractors", e))
    }
}
