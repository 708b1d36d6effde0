//! # jobsite-api
//!
//! HTTP API layer for JobSite Gateway built on Axum.
//!
//! Provides the admin and contractor login surfaces, the guarded record
//! routes, session cookies, request logging, CORS, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use router::{PUBLIC_ROUTES, ROUTE_TABLE, RouteSpec};
pub use state::AppState;
