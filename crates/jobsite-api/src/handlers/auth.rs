//! Login and logout for both surfaces.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use jobsite_core::error::AppError;
use jobsite_entity::{Identity, PrincipalKind};

use crate::cookies::{clear_session, set_session};
use crate::dto::request::{AdminLoginRequest, ContractorLoginRequest, validate_body};
use crate::dto::response::{
    AdminLoginResponse, ApiResponse, ContractorLoginResponse, MessageResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AdminLoginRequest>,
) -> Result<(CookieJar, Json<AdminLoginResponse>), ApiError> {
    validate_body(&req)?;

    let identity = state
        .admin_verifier
        .verify(&req.employee_id, &req.pin, None)
        .await?;
    let Identity::Admin(admin) = &identity else {
        return Err(AppError::internal("Admin login resolved a non-admin identity").into());
    };

    let issued = state.issuer.issue(&identity)?;
    let jar = set_session(jar, &state, PrincipalKind::Admin, issued.token.clone());

    Ok((
        jar,
        Json(AdminLoginResponse {
            success: true,
            admin: admin.clone(),
            token: issued.token,
            is_admin: true,
            expires_at: issued.expires_at,
        }),
    ))
}

/// POST /api/admin/logout
pub async fn admin_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    (
        clear_session(jar, &state, PrincipalKind::Admin),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// POST /api/auth/login
pub async fn contractor_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<ContractorLoginRequest>,
) -> Result<(CookieJar, Json<ContractorLoginResponse>), ApiError> {
    validate_body(&req)?;

    let identity = state
        .contractor_verifier
        .verify(&req.employee_id, &req.pin, req.company_id)
        .await?;
    let Identity::Contractor(contractor) = &identity else {
        return Err(
            AppError::internal("Contractor login resolved a non-contractor identity").into(),
        );
    };

    let issued = state.issuer.issue(&identity)?;
    let jar = set_session(jar, &state, PrincipalKind::Contractor, issued.token.clone());

    Ok((
        jar,
        Json(ContractorLoginResponse {
            success: true,
            is_foreman: contractor.is_foreman,
            contractor: contractor.clone(),
            token: issued.token,
            is_admin: false,
            expires_at: issued.expires_at,
        }),
    ))
}

/// POST /api/auth/logout
pub async fn contractor_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    (
        clear_session(jar, &state, PrincipalKind::Contractor),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}
