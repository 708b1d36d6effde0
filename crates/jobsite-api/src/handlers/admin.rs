//! Admin console handlers.

use axum::Json;
use axum::extract::{Path, State};

use jobsite_auth::{Capability, Principal};
use jobsite_core::error::AppError;
use jobsite_core::types::CompanyId;
use jobsite_database::RecordStore;
use jobsite_entity::{AdminIdentity, ContractorIdentity, Project};

use crate::dto::response::{ApiResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{AdminSession, parse_id};
use crate::handlers::session_response;
use crate::state::AppState;

/// GET /api/admin/session
pub async fn session(
    session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SessionResponse<AdminIdentity>>>, ApiError> {
    let Principal::Admin(admin) = &session.principal else {
        return Err(AppError::internal("Admin session without admin principal").into());
    };
    let body = session_response(&state, &session, admin.identity.clone()).await?;
    Ok(Json(ApiResponse::ok(body)))
}

/// GET /api/admin/companies/{company_id}/projects
pub async fn list_company_projects(
    session: AdminSession,
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let company_id: CompanyId = parse_id(&company_id)?;
    state
        .guard
        .authorize(&session, company_id, Capability::AdminConsole)
        .into_result()?;

    let projects = state.store.list_projects(company_id).await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/admin/companies/{company_id}/contractors
pub async fn list_company_contractors(
    session: AdminSession,
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ContractorIdentity>>>, ApiError> {
    let company_id: CompanyId = parse_id(&company_id)?;
    state
        .guard
        .authorize(&session, company_id, Capability::AdminConsole)
        .into_result()?;

    let contractors = state.store.list_contractors(company_id).await?;
    Ok(Json(ApiResponse::ok(contractors)))
}
