//! Integration tests for the route table: every protected route rejects
//! anonymous requests and every public route answers without a token.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use jobsite_api::{PUBLIC_ROUTES, ROUTE_TABLE};

use helpers::{Auth, TestApp};

fn concrete(path: &str) -> String {
    let id = Uuid::new_v4().to_string();
    path.split('/')
        .map(|segment| {
            if segment.starts_with('{') {
                id.as_str()
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[tokio::test]
async fn test_every_protected_route_requires_a_token() {
    let app = TestApp::new().await;

    for route in ROUTE_TABLE {
        let path = concrete(route.path);
        let response = app.request(route.method, &path, None, Auth::None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{} {path}",
            route.method
        );
        assert_eq!(response.body["message"], "Authentication required");
    }
}

#[tokio::test]
async fn test_every_protected_route_rejects_garbage() {
    let app = TestApp::new().await;

    for route in ROUTE_TABLE {
        let path = concrete(route.path);
        let response = app
            .request(route.method, &path, None, Auth::Bearer("garbage"))
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{} {path}",
            route.method
        );
    }
}

#[tokio::test]
async fn test_public_routes_are_mounted() {
    let app = TestApp::new().await;

    for route in PUBLIC_ROUTES {
        let response = app.request(route.method, route.path, None, Auth::None).await;
        assert_ne!(response.status, StatusCode::NOT_FOUND, "{}", route.path);
        assert_ne!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{}", route.path);
        assert_ne!(response.status, StatusCode::UNAUTHORIZED, "{}", route.path);
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/nope", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
