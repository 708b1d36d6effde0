//! Integration tests for tenant isolation and capability gates.

mod helpers;

use axum::http::StatusCode;

use jobsite_core::types::{IdentityId, ProjectId};

use helpers::{Auth, TestApp};

#[tokio::test]
async fn test_admin_cross_tenant_is_forbidden() {
    let app = TestApp::new().await;
    let token = app.token(app.a.admin.clone());

    let own = app
        .get(&format!("/api/admin/companies/{}/projects", app.a.company.id), &token)
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["data"][0]["id"], app.a.project.id.to_string());

    for path in [
        format!("/api/admin/companies/{}/projects", app.b.company.id),
        format!("/api/admin/companies/{}/contractors", app.b.company.id),
    ] {
        let response = app.get(&path, &token).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(response.body["message"], "Access denied");
    }
}

#[tokio::test]
async fn test_admin_lists_own_contractors() {
    let app = TestApp::new().await;
    let token = app.token(app.a.admin.clone());

    let response = app
        .get(&format!("/api/admin/companies/{}/contractors", app.a.company.id), &token)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_contractor_project_isolation() {
    let app = TestApp::new().await;
    let token = app.token(app.a.contractor.clone());

    let own = app
        .request(
            "GET",
            &format!("/api/projects/{}", app.a.project.id),
            None,
            Auth::Cookie("authToken", &token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["data"]["name"], "Harbor Builders Tower");

    let foreign = app
        .get(&format!("/api/projects/{}", app.b.project.id), &token)
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_record_is_404_only_after_authentication() {
    let app = TestApp::new().await;
    let path = format!("/api/projects/{}", ProjectId::new());

    let anonymous = app.request("GET", &path, None, Auth::None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app.token(app.a.contractor.clone());
    let authenticated = app.get(&path, &token).await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_foreman_gate() {
    let app = TestApp::new().await;
    let plain = app.token(app.a.contractor.clone());
    let foreman = app.token(app.a.foreman.clone());

    let denied = app.get("/api/foreman/contractors", &plain).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["message"], "Access denied");

    let allowed = app.get("/api/foreman/contractors", &foreman).await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert_eq!(allowed.body["data"].as_array().map(Vec::len), Some(2));

    let member = app
        .get(&format!("/api/foreman/contractors/{}", app.a.contractor.id), &foreman)
        .await;
    assert_eq!(member.status, StatusCode::OK);
    assert_eq!(member.body["data"]["employeeId"], "C-101");
}

#[tokio::test]
async fn test_foreman_cannot_reach_other_crews() {
    let app = TestApp::new().await;
    let foreman = app.token(app.a.foreman.clone());

    let response = app
        .get(&format!("/api/foreman/contractors/{}", app.b.contractor.id), &foreman)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let missing = app
        .get(&format!("/api/foreman/contractors/{}", IdentityId::new()), &foreman)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_token_cannot_use_foreman_surface() {
    let app = TestApp::new().await;
    let token = app.token(app.a.admin.clone());

    let response = app.get("/api/foreman/contractors", &token).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_timesheet_visibility_by_role() {
    let app = TestApp::new().await;
    let admin = app.token(app.a.admin.clone());
    let plain = app.token(app.a.contractor.clone());
    let foreman = app.token(app.a.foreman.clone());

    let admin_view = app.get("/api/timesheets?authType=admin", &admin).await;
    assert_eq!(admin_view.status, StatusCode::OK);
    assert_eq!(admin_view.body["data"].as_array().map(Vec::len), Some(2));

    let foreman_view = app.get("/api/timesheets?authType=contractor", &foreman).await;
    assert_eq!(foreman_view.body["data"].as_array().map(Vec::len), Some(2));

    let plain_view = app.get("/api/timesheets", &plain).await;
    assert_eq!(plain_view.status, StatusCode::OK);
    let own = plain_view.body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["contractorId"], app.a.contractor.id.to_string());
}

#[tokio::test]
async fn test_timesheet_record_checks() {
    let app = TestApp::new().await;
    let plain = app.token(app.a.contractor.clone());
    let admin = app.token(app.a.admin.clone());

    let own = app
        .get(&format!("/api/timesheets/{}", app.a.contractor_timesheet.id), &plain)
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let colleague = app
        .get(&format!("/api/timesheets/{}", app.a.foreman_timesheet.id), &plain)
        .await;
    assert_eq!(colleague.status, StatusCode::FORBIDDEN);

    let foreign = app
        .get(
            &format!("/api/timesheets/{}?authType=admin", app.b.contractor_timesheet.id),
            &admin,
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let via_admin_cookie = app
        .request(
            "GET",
            &format!("/api/timesheets/{}?authType=admin", app.a.foreman_timesheet.id),
            None,
            Auth::Cookie("adminAuthToken", &admin),
        )
        .await;
    assert_eq!(via_admin_cookie.status, StatusCode::OK);
}

#[tokio::test]
async fn test_auth_type_selects_namespace() {
    let app = TestApp::new().await;
    let admin = app.token(app.a.admin.clone());

    // Admin cookie is ignored when the contractor namespace is selected.
    let wrong_namespace = app
        .request(
            "GET",
            "/api/timesheets",
            None,
            Auth::Cookie("adminAuthToken", &admin),
        )
        .await;
    assert_eq!(wrong_namespace.status, StatusCode::UNAUTHORIZED);

    let wrong_role = app.get("/api/timesheets?authType=contractor", &admin).await;
    assert_eq!(wrong_role.status, StatusCode::FORBIDDEN);

    let unknown = app.get("/api/timesheets?authType=superuser", &admin).await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contractor_session_carries_company() {
    let app = TestApp::new().await;
    let token = app.token(app.b.foreman.clone());

    let response = app
        .request("GET", "/api/auth/session", None, Auth::Cookie("authToken", &token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["companyId"], app.b.company.id.to_string());
    assert_eq!(response.body["data"]["company"]["name"], "Ridge Construction");
    let capabilities = response.body["data"]["capabilities"].to_string();
    assert!(capabilities.contains("foreman_management"));
}
