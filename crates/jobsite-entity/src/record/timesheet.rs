//! Timesheet entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::{CompanyId, IdentityId, ProjectId, TimesheetId};

/// Hours one contractor worked on one project on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    /// Unique timesheet identifier.
    pub id: TimesheetId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Project worked on.
    pub project_id: ProjectId,
    /// Contractor who worked.
    pub contractor_id: IdentityId,
    /// Day worked.
    pub work_date: NaiveDate,
    /// Hours worked.
    pub hours: f64,
}
