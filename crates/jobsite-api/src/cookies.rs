//! Session cookies for the two token namespaces.
//!
//! Both cookies use path `/`, `SameSite=Lax`, a max-age equal to the token
//! TTL, and the `Secure` flag only in production. The admin cookie is
//! readable by client scripts; the contractor cookie is http-only.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use jobsite_entity::PrincipalKind;

use crate::state::AppState;

/// Builds the session cookie for `kind` carrying `token`.
pub fn session_cookie(state: &AppState, kind: PrincipalKind, token: String) -> Cookie<'static> {
    Cookie::build((state.cookie_name(kind).to_string(), token))
        .path("/")
        .max_age(time::Duration::seconds(state.issuer.ttl_seconds()))
        .http_only(kind == PrincipalKind::Contractor)
        .secure(state.config.server.environment.is_production())
        .same_site(SameSite::Lax)
        .build()
}

/// Adds the session cookie for `kind` to `jar`.
pub fn set_session(jar: CookieJar, state: &AppState, kind: PrincipalKind, token: String) -> CookieJar {
    jar.add(session_cookie(state, kind, token))
}

/// Expires the session cookie for `kind`, whether or not the request carried it.
pub fn clear_session(jar: CookieJar, state: &AppState, kind: PrincipalKind) -> CookieJar {
    jar.add(
        Cookie::build((state.cookie_name(kind).to_string(), ""))
            .path("/")
            .max_age(time::Duration::ZERO)
            .http_only(kind == PrincipalKind::Contractor)
            .secure(state.config.server.environment.is_production())
            .same_site(SameSite::Lax),
    )
}

/// Reads the raw token for `kind` from `jar`, ignoring empty values.
pub fn session_token<'a>(jar: &'a CookieJar, state: &AppState, kind: PrincipalKind) -> Option<&'a str> {
    jar.get(state.cookie_name(kind))
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
}
