//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

use jobsite_api::{AppState, build_app};
use jobsite_auth::PinHasher;
use jobsite_core::config::{AppConfig, SigningSecret};
use jobsite_core::types::{CompanyId, CredentialId, IdentityId, ProjectId, TimesheetId};
use jobsite_database::{MemoryDirectory, StoreManager};
use jobsite_entity::{
    AdminIdentity, Company, ContractorIdentity, Credential, Identity, PrincipalKind, Project,
    Timesheet,
};

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-signing-secret";

/// One seeded company with its people and records.
#[derive(Debug, Clone)]
pub struct Tenant {
    pub company: Company,
    pub admin: AdminIdentity,
    pub contractor: ContractorIdentity,
    pub foreman: ContractorIdentity,
    pub project: Project,
    pub contractor_timesheet: Timesheet,
    pub foreman_timesheet: Timesheet,
}

/// How a request carries its token.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Bearer(&'a str),
    Cookie(&'a str, &'a str),
    /// Cookie `(name, token)` plus a separate bearer token.
    CookieAndBearer(&'a str, &'a str, &'a str),
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for minting tokens directly
    pub state: AppState,
    /// Tenant whose admin is the bootstrap admin
    pub a: Tenant,
    /// A second, unrelated tenant
    pub b: Tenant,
}

impl TestApp {
    /// Create a new test application over a seeded in-memory store.
    pub async fn new() -> Self {
        let dir = MemoryDirectory::new();
        // Both tenants reuse the same employee IDs.
        let a = seed_tenant(&dir, "Harbor Builders");
        let b = seed_tenant(&dir, "Ridge Construction");

        let mut config = AppConfig::default();
        config.auth.bootstrap_admin.company_id = a.company.id.to_string();
        config.auth.bootstrap_admin.identity_id = a.admin.id.to_string();

        let state = AppState::with_secret(
            config,
            StoreManager::from_memory(dir),
            &SigningSecret::new(TEST_SECRET),
        )
        .expect("Failed to build state");

        Self {
            router: build_app(state.clone()),
            state,
            a,
            b,
        }
    }

    /// Mint a token for `identity` issued at `at`.
    pub fn token_at(&self, identity: impl Into<Identity>, at: DateTime<Utc>) -> String {
        self.state
            .issuer
            .issue_at(&identity.into(), at)
            .expect("Failed to issue token")
            .token
    }

    /// Mint a token for `identity` issued now.
    pub fn token(&self, identity: impl Into<Identity>) -> String {
        self.token_at(identity, Utc::now())
    }

    /// Mint a token that expired an hour ago.
    pub fn expired_token(&self, identity: impl Into<Identity>) -> String {
        self.token_at(identity, Utc::now() - Duration::hours(25))
    }

    /// Send a request through the full middleware stack.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Auth<'_>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        match auth {
            Auth::None => {}
            Auth::Bearer(token) => {
                req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            Auth::Cookie(name, token) => {
                req = req.header(header::COOKIE, format!("{name}={token}"));
            }
            Auth::CookieAndBearer(name, cookie, bearer) => {
                req = req
                    .header(header::COOKIE, format!("{name}={cookie}"))
                    .header(header::AUTHORIZATION, format!("Bearer {bearer}"));
            }
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// GET with a bearer token.
    pub async fn get(&self, path: &str, token: &str) -> TestResponse {
        self.request("GET", path, None, Auth::Bearer(token)).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Null`
    pub body: Value,
}

impl TestResponse {
    /// Returns the `Set-Cookie` header for `name`, if any.
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }
}

/// Register a credential for `identity`.
pub fn add_credential(dir: &MemoryDirectory, identity: &Identity, identifier: &str, pin: &str) {
    dir.insert_credential(Credential {
        id: CredentialId::new(),
        company_id: identity.company_id(),
        identity_id: identity.id(),
        kind: identity.kind(),
        identifier: identifier.to_string(),
        secret_hash: PinHasher::new().hash_pin(pin).expect("Failed to hash PIN"),
    })
    .expect("Failed to register credential");
}

fn seed_tenant(dir: &MemoryDirectory, name: &str) -> Tenant {
    let company = Company {
        id: CompanyId::new(),
        name: name.to_string(),
        created_at: Utc::now(),
    };
    let admin = AdminIdentity {
        id: IdentityId::new(),
        company_id: company.id,
        display_name: format!("{name} Admin"),
        employee_id: "admin001".to_string(),
        locale: "en".to_string(),
    };
    let contractor = ContractorIdentity {
        id: IdentityId::new(),
        company_id: company.id,
        display_name: "Marco Reyes".to_string(),
        employee_id: "C-101".to_string(),
        role: "laborer".to_string(),
        is_foreman: false,
        locale: "es".to_string(),
    };
    let foreman = ContractorIdentity {
        id: IdentityId::new(),
        company_id: company.id,
        display_name: "Dana Whitfield".to_string(),
        employee_id: "C-200".to_string(),
        role: "site foreman".to_string(),
        is_foreman: true,
        locale: "en".to_string(),
    };
    let project = Project {
        id: ProjectId::new(),
        company_id: company.id,
        name: format!("{name} Tower"),
        location: Some("Lot 7".to_string()),
        active: true,
    };
    let timesheet = |contractor_id: IdentityId| Timesheet {
        id: TimesheetId::new(),
        company_id: company.id,
        project_id: project.id,
        contractor_id,
        work_date: NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"),
        hours: 8.0,
    };
    let contractor_timesheet = timesheet(contractor.id);
    let foreman_timesheet = timesheet(foreman.id);

    dir.insert_company(company.clone());
    dir.insert_admin(admin.clone());
    dir.insert_contractor(contractor.clone());
    dir.insert_contractor(foreman.clone());
    dir.insert_project(project.clone());
    dir.insert_timesheet(contractor_timesheet.clone());
    dir.insert_timesheet(foreman_timesheet.clone());

    add_credential(dir, &Identity::Contractor(contractor.clone()), &contractor.employee_id, "4821");
    add_credential(dir, &Identity::Contractor(foreman.clone()), &foreman.employee_id, "7350");

    Tenant {
        company,
        admin,
        contractor,
        foreman,
        project,
        contractor_timesheet,
        foreman_timesheet,
    }
}

/// The principal kind whose cookie a route reads.
pub fn cookie_for(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::Admin => "adminAuthToken",
        PrincipalKind::Contractor => "authToken",
    }
}
