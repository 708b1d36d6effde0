//! Session extractors, one per protected route class.
//!
//! Each extractor reads the token of its namespace (cookie first, then
//! `Authorization: Bearer`), resolves it, and checks the class capability
//! against the session's own company. Record handlers then check the
//! record's company with [`RouteGuard::authorize`](jobsite_auth::RouteGuard::authorize).

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use jobsite_auth::{AuthError, ResolvedSession, RouteClass};
use jobsite_core::error::AppError;
use jobsite_entity::PrincipalKind;

use crate::cookies::session_token;
use crate::dto::request::AuthTypeQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the session for `kind` and checks the capability of `class`.
async fn authenticate(
    parts: &mut Parts,
    state: &AppState,
    kind: PrincipalKind,
    class: RouteClass,
) -> Result<ResolvedSession, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);

    let token = match session_token(&jar, state, kind) {
        Some(token) => token.to_string(),
        None => TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map(|TypedHeader(auth)| auth.token().to_string())
            .map_err(|_| AuthError::MissingAuth)?,
    };

    let session = state.resolver.resolve(&token, Some(kind))?;

    if let Some(capability) = class.capability() {
        state.guard.require(&session, capability).into_result()?;
    }

    tracing::debug!(
        identity_id = %session.principal.id(),
        company_id = %session.company_id,
        %class,
        "Session resolved"
    );
    Ok(session)
}

macro_rules! session_extractor {
    ($(#[$meta:meta])* $name:ident, $class:expr, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub ResolvedSession);

        impl std::ops::Deref for $name {
            type Target = ResolvedSession;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl FromRequestParts<AppState> for $name {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                Ok(Self(authenticate(parts, state, $kind, $class).await?))
            }
        }
    };
}

session_extractor!(
    /// An admin session, read from the admin namespace.
    AdminSession,
    RouteClass::Admin,
    PrincipalKind::Admin
);

session_extractor!(
    /// A contractor session, read from the contractor namespace.
    ContractorSession,
    RouteClass::Contractor,
    PrincipalKind::Contractor
);

session_extractor!(
    /// A contractor session holding the foreman capability.
    ForemanSession,
    RouteClass::Foreman,
    PrincipalKind::Contractor
);

/// A session from the namespace selected by the `authType` query
/// parameter. Absent selects the contractor namespace.
#[derive(Debug, Clone)]
pub struct SharedSession(pub ResolvedSession);

impl std::ops::Deref for SharedSession {
    type Target = ResolvedSession;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SharedSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<AuthTypeQuery>::try_from_uri(&parts.uri)
            .map_err(|_| AppError::validation("Invalid query string"))?;

        let kind = match query.auth_type.as_deref() {
            None => PrincipalKind::Contractor,
            Some(value) => value
                .parse::<PrincipalKind>()
                .map_err(|_| AppError::validation("authType must be 'admin' or 'contractor'"))?,
        };

        Ok(Self(authenticate(parts, state, kind, RouteClass::Shared).await?))
    }
}
