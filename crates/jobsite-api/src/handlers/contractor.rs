//! Contractor portal handlers.

use axum::Json;
use axum::extract::{Path, State};

use jobsite_auth::{Capability, Principal};
use jobsite_core::error::AppError;
use jobsite_core::types::ProjectId;
use jobsite_database::RecordStore;
use jobsite_entity::{ContractorIdentity, Project};

use crate::dto::response::{ApiResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{ContractorSession, parse_id};
use crate::handlers::session_response;
use crate::state::AppState;

/// GET /api/auth/session
pub async fn session(
    session: ContractorSession,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SessionResponse<ContractorIdentity>>>, ApiError> {
    let Principal::Contractor(contractor) = &session.principal else {
        return Err(
            AppError::internal("Contractor session without contractor principal").into(),
        );
    };
    let body = session_response(&state, &session, contractor.identity.clone()).await?;
    Ok(Json(ApiResponse::ok(body)))
}

/// GET /api/projects/{project_id}
pub async fn get_project(
    session: ContractorSession,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project_id: ProjectId = parse_id(&project_id)?;
    let project = state
        .store
        .find_project(project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    state
        .guard
        .authorize(&session, project.company_id, Capability::ContractorPortal)
        .into_result()?;

    Ok(Json(ApiResponse::ok(project)))
}
