//! Timesheet handlers shared by both surfaces.
//!
//! Admins and foremen see every timesheet of their company. A plain
//! contractor sees only their own.

use axum::Json;
use axum::extract::{Path, State};

use jobsite_auth::{AuthError, Capability};
use jobsite_core::error::AppError;
use jobsite_core::types::TimesheetId;
use jobsite_database::RecordStore;
use jobsite_entity::Timesheet;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{SharedSession, parse_id};
use crate::state::AppState;

/// GET /api/timesheets?authType=admin|contractor
pub async fn list_timesheets(
    session: SharedSession,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Timesheet>>>, ApiError> {
    let owner = (!session.principal.sees_whole_company()).then(|| session.principal.id());
    let timesheets = state
        .store
        .list_timesheets(session.company_id, owner)
        .await?;
    Ok(Json(ApiResponse::ok(timesheets)))
}

/// GET /api/timesheets/{timesheet_id}?authType=admin|contractor
pub async fn get_timesheet(
    session: SharedSession,
    State(state): State<AppState>,
    Path(timesheet_id): Path<String>,
) -> Result<Json<ApiResponse<Timesheet>>, ApiError> {
    let timesheet_id: TimesheetId = parse_id(&timesheet_id)?;
    let timesheet = state
        .store
        .find_timesheet(timesheet_id)
        .await?
        .ok_or_else(|| AppError::not_found("Timesheet not found"))?;

    state
        .guard
        .authorize(&session, timesheet.company_id, Capability::TenantRecords)
        .into_result()?;

    if !session.principal.sees_whole_company() && timesheet.contractor_id != session.principal.id() {
        return Err(AuthError::MissingCapability(Capability::ForemanManagement).into());
    }

    Ok(Json(ApiResponse::ok(timesheet)))
}
