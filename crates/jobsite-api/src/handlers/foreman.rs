//! Crew management handlers, gated on the foreman capability.

use axum::Json;
use axum::extract::{Path, State};

use jobsite_auth::Capability;
use jobsite_core::error::AppError;
use jobsite_core::types::IdentityId;
use jobsite_database::RecordStore;
use jobsite_entity::ContractorIdentity;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ForemanSession, parse_id};
use crate::state::AppState;

/// GET /api/foreman/contractors
pub async fn list_crew(
    session: ForemanSession,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ContractorIdentity>>>, ApiError> {
    let crew = state.store.list_contractors(session.company_id).await?;
    Ok(Json(ApiResponse::ok(crew)))
}

/// GET /api/foreman/contractors/{contractor_id}
pub async fn get_crew_member(
    session: ForemanSession,
    State(state): State<AppState>,
    Path(contractor_id): Path<String>,
) -> Result<Json<ApiResponse<ContractorIdentity>>, ApiError> {
    let contractor_id: IdentityId = parse_id(&contractor_id)?;
    let member = state
        .store
        .find_contractor(contractor_id)
        .await?
        .ok_or_else(|| AppError::not_found("Contractor not found"))?;

    state
        .guard
        .authorize(&session, member.company_id, Capability::ForemanManagement)
        .into_result()?;

    Ok(Json(ApiResponse::ok(member)))
}
