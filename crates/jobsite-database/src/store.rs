//! Store traits consumed by the auth and API layers.
//!
//! Both traits are implemented by the PostgreSQL store, the in-memory
//! directory, and the [`StoreManager`](crate::StoreManager) dispatcher.

use async_trait::async_trait;

use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId, ProjectId, TimesheetId};
use jobsite_entity::{
    Company, ContractorIdentity, Credential, Identity, PrincipalKind, Project, Timesheet,
};

/// A credential joined with the identity it logs in as.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// The stored credential.
    pub credential: Credential,
    /// The identity snapshot at lookup time.
    pub identity: Identity,
}

/// Lookup of login credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find credentials of `kind` whose identifier equals `identifier`.
    ///
    /// With `company` set, at most one record is returned. Without it, every
    /// company's match is returned so the caller can reject ambiguity.
    async fn find_credentials(
        &self,
        kind: PrincipalKind,
        identifier: &str,
        company: Option<CompanyId>,
    ) -> AppResult<Vec<CredentialRecord>>;
}

/// Read access to company-owned business records.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Find a company by ID.
    async fn find_company(&self, id: CompanyId) -> AppResult<Option<Company>>;

    /// Find a project by ID, regardless of company.
    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>>;

    /// List a company's projects.
    async fn list_projects(&self, company: CompanyId) -> AppResult<Vec<Project>>;

    /// Find a contractor by ID, regardless of company.
    async fn find_contractor(&self, id: IdentityId) -> AppResult<Option<ContractorIdentity>>;

    /// List a company's contractors.
    async fn list_contractors(&self, company: CompanyId) -> AppResult<Vec<ContractorIdentity>>;

    /// Find a timesheet by ID, regardless of company.
    async fn find_timesheet(&self, id: TimesheetId) -> AppResult<Option<Timesheet>>;

    /// List a company's timesheets, optionally only one contractor's.
    async fn list_timesheets(
        &self,
        company: CompanyId,
        contractor: Option<IdentityId>,
    ) -> AppResult<Vec<Timesheet>>;
}
