//! Timesheet repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId, TimesheetId};
use jobsite_entity::Timesheet;

const COLUMNS: &str = "id, company_id, project_id, contractor_id, work_date, hours";

/// Repository for timesheets.
#[derive(Debug, Clone)]
pub struct TimesheetRepository {
    pool: PgPool,
}

impl TimesheetRepository {
    /// Create a new timesheet repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a timesheet by primary key.
    pub async fn find_by_id(&self, id: TimesheetId) -> AppResult<Option<Timesheet>> {
        sqlx::query_as::<_, Timesheet>(&format!("SELECT {COLUMNS} FROM timesheets WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find timesheet", e)
            })
    }

    /// List a company's timesheets, newest first, optionally for one contractor.
    pub async fn find_by_company(
        &self,
        company: CompanyId,
        contractor: Option<IdentityId>,
    ) -> AppResult<Vec<Timesheet>> {
        sqlx::query_as::<_, Timesheet>(&format!(
            "SELECT {COLUMNS} FROM timesheets \
             WHERE company_id = $1 AND ($2::uuid IS NULL OR contractor_id = $2) \
             ORDER BY work_date DESC"
        ))
        .bind(company)
        .bind(contractor)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list timesheets", e))
    }
}
