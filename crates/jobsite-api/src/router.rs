//! Route definitions for the JobSite HTTP API.
//!
//! [`ROUTE_TABLE`] lists every mounted route with its [`RouteClass`].
//! Public routes are enumerated in [`PUBLIC_ROUTES`]; every other route is
//! protected by the session extractor of its class.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use jobsite_auth::RouteClass;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// One mounted route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    /// HTTP method.
    pub method: &'static str,
    /// Path, with `{param}` placeholders.
    pub path: &'static str,
    /// Enforcement class.
    pub class: RouteClass,
}

const fn route(method: &'static str, path: &'static str, class: RouteClass) -> RouteSpec {
    RouteSpec {
        method,
        path,
        class,
    }
}

/// Routes reachable without a token.
pub const PUBLIC_ROUTES: &[RouteSpec] = &[
    route("GET", "/api/health", RouteClass::Public),
    route("POST", "/api/admin/login", RouteClass::Public),
    route("POST", "/api/admin/logout", RouteClass::Public),
    route("POST", "/api/auth/login", RouteClass::Public),
    route("POST", "/api/auth/logout", RouteClass::Public),
];

/// Every route the API mounts except the public ones.
pub const ROUTE_TABLE: &[RouteSpec] = &[
    route("GET", "/api/admin/session", RouteClass::Admin),
    route("GET", "/api/admin/companies/{company_id}/projects", RouteClass::Admin),
    route("GET", "/api/admin/companies/{company_id}/contractors", RouteClass::Admin),
    route("GET", "/api/auth/session", RouteClass::Contractor),
    route("GET", "/api/projects/{project_id}", RouteClass::Contractor),
    route("GET", "/api/foreman/contractors", RouteClass::Foreman),
    route("GET", "/api/foreman/contractors/{contractor_id}", RouteClass::Foreman),
    route("GET", "/api/timesheets", RouteClass::Shared),
    route("GET", "/api/timesheets/{timesheet_id}", RouteClass::Shared),
];

/// Iterates public and protected routes together.
pub fn all_routes() -> impl Iterator<Item = &'static RouteSpec> {
    PUBLIC_ROUTES.iter().chain(ROUTE_TABLE.iter())
}

/// Build the Axum router with all routes and the logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(admin_routes())
        .merge(contractor_routes())
        .merge(foreman_routes())
        .merge(shared_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health, login and logout.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/admin/login", post(handlers::auth::admin_login))
        .route("/admin/logout", post(handlers::auth::admin_logout))
        .route("/auth/login", post(handlers::auth::contractor_login))
        .route("/auth/logout", post(handlers::auth::contractor_logout))
}

/// Admin console, admin token only.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/session", get(handlers::admin::session))
        .route(
            "/admin/companies/{company_id}/projects",
            get(handlers::admin::list_company_projects),
        )
        .route(
            "/admin/companies/{company_id}/contractors",
            get(handlers::admin::list_company_contractors),
        )
}

/// Contractor portal, contractor token only.
fn contractor_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/session", get(handlers::contractor::session))
        .route("/projects/{project_id}", get(handlers::contractor::get_project))
}

/// Crew management, foreman capability.
fn foreman_routes() -> Router<AppState> {
    Router::new()
        .route("/foreman/contractors", get(handlers::foreman::list_crew))
        .route(
            "/foreman/contractors/{contractor_id}",
            get(handlers::foreman::get_crew_member),
        )
}

/// Records reachable from either namespace via `authType`.
fn shared_routes() -> Router<AppState> {
    Router::new()
        .route("/timesheets", get(handlers::timesheet::list_timesheets))
        .route(
            "/timesheets/{timesheet_id}",
            get(handlers::timesheet::get_timesheet),
        )
}
