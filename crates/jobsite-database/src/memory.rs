//! In-memory directory backed by `dashmap`.
//!
//! Used for development runs (`database.backend = "memory"`) and tests.
//! Secrets must already be hashed when inserted.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use jobsite_core::error::AppError;
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId, ProjectId, TimesheetId};
use jobsite_entity::{
    AdminIdentity, Company, ContractorIdentity, Credential, Identity, PrincipalKind, Project,
    Timesheet,
};

use crate::store::{CredentialRecord, CredentialStore, RecordStore};

/// Credentials are unique per `(company, kind, identifier)`.
type CredentialKey = (CompanyId, PrincipalKind, String);

/// Process-local credential and record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    companies: Arc<DashMap<CompanyId, Company>>,
    identities: Arc<DashMap<IdentityId, Identity>>,
    credentials: Arc<DashMap<CredentialKey, Credential>>,
    projects: Arc<DashMap<ProjectId, Project>>,
    timesheets: Arc<DashMap<TimesheetId, Timesheet>>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a company.
    pub fn insert_company(&self, company: Company) {
        self.companies.insert(company.id, company);
    }

    /// Insert or replace an admin identity.
    pub fn insert_admin(&self, admin: AdminIdentity) {
        self.identities.insert(admin.id, Identity::Admin(admin));
    }

    /// Insert or replace a contractor identity.
    pub fn insert_contractor(&self, contractor: ContractorIdentity) {
        self.identities
            .insert(contractor.id, Identity::Contractor(contractor));
    }

    /// Insert a credential for an identity already in the directory.
    ///
    /// Fails with a conflict when the company already has a credential of the
    /// same kind with the same identifier.
    pub fn insert_credential(&self, credential: Credential) -> AppResult<()> {
        let key = (
            credential.company_id,
            credential.kind,
            credential.identifier.clone(),
        );
        match self.credentials.entry(key) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Company {} already has a {} credential '{}'",
                credential.company_id, credential.kind, credential.identifier
            ))),
            Entry::Vacant(slot) => {
                debug!(
                    company_id = %credential.company_id,
                    kind = %credential.kind,
                    "Registering in-memory credential"
                );
                slot.insert(credential);
                Ok(())
            }
        }
    }

    /// Insert or replace a project.
    pub fn insert_project(&self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Insert or replace a timesheet.
    pub fn insert_timesheet(&self, timesheet: Timesheet) {
        self.timesheets.insert(timesheet.id, timesheet);
    }
}

#[async_trait]
impl CredentialStore for MemoryDirectory {
    async fn find_credentials(
        &self,
        kind: PrincipalKind,
        identifier: &str,
        company: Option<CompanyId>,
    ) -> AppResult<Vec<CredentialRecord>> {
        let records = self
            .credentials
            .iter()
            .filter(|c| c.kind == kind && c.identifier == identifier)
            .filter(|c| company.is_none_or(|id| c.company_id == id))
            .filter_map(|c| {
                let identity = self.identities.get(&c.identity_id)?.clone();
                // A credential must log in as an identity of the same company and kind.
                (identity.company_id() == c.company_id && identity.kind() == c.kind).then(|| {
                    CredentialRecord {
                        credential: c.clone(),
                        identity,
                    }
                })
            })
            .collect();
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for MemoryDirectory {
    async fn find_company(&self, id: CompanyId) -> AppResult<Option<Company>> {
        Ok(self.companies.get(&id).map(|c| c.clone()))
    }

    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.projects.get(&id).map(|p| p.clone()))
    }

    async fn list_projects(&self, company: CompanyId) -> AppResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| p.company_id == company)
            .map(|p| p.clone())
            .collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    async fn find_contractor(&self, id: IdentityId) -> AppResult<Option<ContractorIdentity>> {
        Ok(self.identities.get(&id).and_then(|i| match i.value() {
            Identity::Contractor(c) => Some(c.clone()),
            Identity::Admin(_) => None,
        }))
    }

    async fn list_contractors(&self, company: CompanyId) -> AppResult<Vec<ContractorIdentity>> {
        let mut contractors: Vec<ContractorIdentity> = self
            .identities
            .iter()
            .filter_map(|i| match i.value() {
                Identity::Contractor(c) if c.company_id == company => Some(c.clone()),
                _ => None,
            })
            .collect();
        contractors.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(contractors)
    }

    async fn find_timesheet(&self, id: TimesheetId) -> AppResult<Option<Timesheet>> {
        Ok(self.timesheets.get(&id).map(|t| t.clone()))
    }

    async fn list_timesheets(
        &self,
        company: CompanyId,
        contractor: Option<IdentityId>,
    ) -> AppResult<Vec<Timesheet>> {
        let mut timesheets: Vec<Timesheet> = self
            .timesheets
            .iter()
            .filter(|t| t.company_id == company)
            .filter(|t| contractor.is_none_or(|id| t.contractor_id == id))
            .map(|t| t.clone())
            .collect();
        timesheets.sort_by(|a, b| b.work_date.cmp(&a.work_date));
        Ok(timesheets)
    }
}
