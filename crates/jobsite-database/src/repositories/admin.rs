//! Admin identity repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::IdentityId;
use jobsite_entity::AdminIdentity;

/// Repository for admin identities.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by identity ID.
    pub async fn find_by_id(&self, id: IdentityId) -> AppResult<Option<AdminIdentity>> {
        sqlx::query_as::<_, AdminIdentity>(
            "SELECT id, company_id, display_name, employee_id, locale FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin", e))
    }
}
