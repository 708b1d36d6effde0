//! Integration tests for the admin and contractor login surfaces.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{Auth, TestApp};

#[tokio::test]
async fn test_admin_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "employeeId": "admin001", "pin": "1234" })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAdmin"], true);
    assert_eq!(response.body["admin"]["employeeId"], "admin001");
    assert_eq!(response.body["admin"]["companyId"], app.a.company.id.to_string());
    let token = response.body["token"].as_str().expect("token");
    assert!(!token.is_empty());

    let cookie = response.set_cookie("adminAuthToken").expect("admin cookie");
    assert!(cookie.contains(token));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Secure"));

    let session = app
        .request("GET", "/api/admin/session", None, Auth::Cookie("adminAuthToken", token))
        .await;
    assert_eq!(session.status, StatusCode::OK);
    assert_eq!(session.body["data"]["identity"]["employeeId"], "admin001");
    assert_eq!(session.body["data"]["company"]["name"], "Harbor Builders");
}

#[tokio::test]
async fn test_admin_login_wrong_pin_is_generic() {
    let app = TestApp::new().await;

    let wrong_pin = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "employeeId": "admin001", "pin": "0000" })),
            Auth::None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "employeeId": "admin999", "pin": "1234" })),
            Auth::None,
        )
        .await;

    assert_eq!(wrong_pin.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pin.body, unknown.body);
    assert_eq!(wrong_pin.body["message"], "Invalid employee ID or PIN");
    assert!(wrong_pin.body.get("token").is_none());
    assert!(wrong_pin.set_cookie("adminAuthToken").is_none());
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "employeeId": "admin001" })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contractor_login_with_company() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "employeeId": "C-200",
                "pin": "7350",
                "companyId": app.b.company.id,
            })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAdmin"], false);
    assert_eq!(response.body["isForeman"], true);
    assert_eq!(response.body["contractor"]["id"], app.b.foreman.id.to_string());

    let cookie = response.set_cookie("authToken").expect("contractor cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_contractor_login_ambiguous_without_company() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "employeeId": "C-101", "pin": "4821" })),
            Auth::None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid employee ID or PIN");
}

#[tokio::test]
async fn test_contractor_token_cannot_reach_admin_surface() {
    let app = TestApp::new().await;
    let token = app.token(app.a.foreman.clone());

    let response = app.get("/api/admin/session", &token).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Access denied");

    let response = app
        .request("GET", "/api/admin/session", None, Auth::Cookie("authToken", &token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_and_garbage_tokens_look_the_same() {
    let app = TestApp::new().await;
    let expired = app.expired_token(app.a.admin.clone());

    let expired_response = app.get("/api/admin/session", &expired).await;
    let garbage_response = app.get("/api/admin/session", "not.a.token").await;
    let missing_response = app
        .request("GET", "/api/admin/session", None, Auth::None)
        .await;

    assert_eq!(expired_response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage_response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing_response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_response.body, garbage_response.body);
    assert_eq!(expired_response.body, missing_response.body);
    assert_eq!(expired_response.body["message"], "Authentication required");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let other = jobsite_auth::TokenIssuer::new(
        &jobsite_core::config::SigningSecret::new("someone-elses-secret"),
        86400,
    )
    .unwrap();
    let token = other
        .issue(&jobsite_entity::Identity::Admin(app.a.admin.clone()))
        .unwrap()
        .token;

    let response = app.get("/api/admin/session", &token).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/admin/logout", None, Auth::None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie("adminAuthToken").expect("removal cookie");
    assert!(cookie.contains("Max-Age=0"));

    let response = app.request("POST", "/api/auth/logout", None, Auth::None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie("authToken").is_some());
}

#[tokio::test]
async fn test_logout_with_cookie_expires_it() {
    let app = TestApp::new().await;
    let token = app.token(app.a.admin.clone());

    let response = app
        .request(
            "POST",
            "/api/admin/logout",
            None,
            Auth::Cookie("adminAuthToken", &token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie("adminAuthToken").expect("removal cookie");
    assert!(cookie.starts_with("adminAuthToken=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_namespace_cookie_wins_over_bearer() {
    let app = TestApp::new().await;
    let valid = app.token(app.a.admin.clone());
    let stale = app.expired_token(app.a.admin.clone());

    let response = app
        .request(
            "GET",
            "/api/admin/session",
            None,
            Auth::CookieAndBearer("adminAuthToken", &stale, &valid),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // A bearer alone is accepted.
    let response = app.get("/api/admin/session", &valid).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_logins_are_independent() {
    let app = TestApp::new().await;
    let body = json!({ "employeeId": "admin001", "pin": "1234" });

    let first = app
        .request("POST", "/api/admin/login", Some(body.clone()), Auth::None)
        .await;
    let second = app
        .request("POST", "/api/admin/login", Some(body), Auth::None)
        .await;

    for response in [first, second] {
        let token = response.body["token"].as_str().expect("token").to_string();
        assert_eq!(app.get("/api/admin/session", &token).await.status, StatusCode::OK);
    }
}
