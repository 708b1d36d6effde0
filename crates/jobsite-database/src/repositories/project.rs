//! Project repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, ProjectId};
use jobsite_entity::Project;

/// Repository for projects.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: ProjectId) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT id, company_id, name, location, active FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// List a company's projects by name.
    pub async fn find_by_company(&self, company: CompanyId) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT id, company_id, name, location, active FROM projects \
             WHERE company_id = $1 ORDER BY name",
        )
        .bind(company)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }
}
