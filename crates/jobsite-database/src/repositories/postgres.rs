//! PostgreSQL-backed store composed from the per-table repositories.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId, ProjectId, TimesheetId};
use jobsite_entity::{
    Company, ContractorIdentity, Credential, Identity, PrincipalKind, Project, Timesheet,
};

use super::{
    AdminRepository, CompanyRepository, ContractorRepository, CredentialRepository,
    ProjectRepository, TimesheetRepository,
};
use crate::store::{CredentialRecord, CredentialStore, RecordStore};

/// Store implementation over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    companies: CompanyRepository,
    admins: AdminRepository,
    contractors: ContractorRepository,
    credentials: CredentialRepository,
    projects: ProjectRepository,
    timesheets: TimesheetRepository,
}

impl PgStore {
    /// Create a store sharing one pool across all repositories.
    pub fn new(pool: PgPool) -> Self {
        Self {
            companies: CompanyRepository::new(pool.clone()),
            admins: AdminRepository::new(pool.clone()),
            contractors: ContractorRepository::new(pool.clone()),
            credentials: CredentialRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            timesheets: TimesheetRepository::new(pool),
        }
    }

    async fn load_identity(&self, credential: &Credential) -> AppResult<Option<Identity>> {
        let identity = match credential.kind {
            PrincipalKind::Admin => self
                .admins
                .find_by_id(credential.identity_id)
                .await?
                .map(Identity::Admin),
            PrincipalKind::Contractor => self
                .contractors
                .find_by_id(credential.identity_id)
                .await?
                .map(Identity::Contractor),
        };

        Ok(identity.filter(|i| i.company_id() == credential.company_id))
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_credentials(
        &self,
        kind: PrincipalKind,
        identifier: &str,
        company: Option<CompanyId>,
    ) -> AppResult<Vec<CredentialRecord>> {
        let credentials = self
            .credentials
            .find_by_identifier(kind, identifier, company)
            .await?;

        let mut records = Vec::with_capacity(credentials.len());
        for credential in credentials {
            match self.load_identity(&credential).await? {
                Some(identity) => records.push(CredentialRecord {
                    credential,
                    identity,
                }),
                None => warn!(
                    credential_id = %credential.id,
                    "Credential has no matching identity in its company; ignoring"
                ),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn find_company(&self, id: CompanyId) -> AppResult<Option<Company>> {
        self.companies.find_by_id(id).await
    }

    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>> {
        self.projects.find_by_id(id).await
    }

    async fn list_projects(&self, company: CompanyId) -> AppResult<Vec<Project>> {
        self.projects.find_by_company(company).await
    }

    async fn find_contractor(&self, id: IdentityId) -> AppResult<Option<ContractorIdentity>> {
        self.contractors.find_by_id(id).await
    }

    async fn list_contractors(&self, company: CompanyId) -> AppResult<Vec<ContractorIdentity>> {
        self.contractors.find_by_company(company).await
    }

    async fn find_timesheet(&self, id: TimesheetId) -> AppResult<Option<Timesheet>> {
        self.timesheets.find_by_id(id).await
    }

    async fn list_timesheets(
        &self,
        company: CompanyId,
        contractor: Option<IdentityId>,
    ) -> AppResult<Vec<Timesheet>> {
        self.timesheets.find_by_company(company, contractor).await
    }
}
