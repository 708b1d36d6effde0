//! Company repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::CompanyId;
use jobsite_entity::Company;

/// Repository for company lookups.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by primary key.
    pub async fn find_by_id(&self, id: CompanyId) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT id, name, created_at FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find company", e))
    }
}
