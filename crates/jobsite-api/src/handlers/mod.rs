//! Route handlers organized by login surface.

pub mod admin;
pub mod auth;
pub mod contractor;
pub mod foreman;
pub mod health;
pub mod timesheet;

use jobsite_auth::ResolvedSession;
use jobsite_core::result::AppResult;
use jobsite_database::RecordStore;

use crate::dto::response::SessionResponse;
use crate::state::AppState;

/// Builds the session body shared by the admin and contractor session routes.
pub(crate) async fn session_response<T: serde::Serialize>(
    state: &AppState,
    session: &ResolvedSession,
    identity: T,
) -> AppResult<SessionResponse<T>> {
    let company = state.store.find_company(session.company_id).await?;
    Ok(SessionResponse {
        identity,
        company_id: session.company_id,
        company,
        expires_at: session.expires_at,
        capabilities: session
            .principal
            .capabilities()
            .iter()
            .map(|c| c.as_str())
            .collect(),
    })
}
