//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use jobsite_core::config::{DatabaseBackend, DatabaseConfig};
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId, ProjectId, TimesheetId};
use jobsite_entity::{Company, ContractorIdentity, PrincipalKind, Project, Timesheet};

use crate::connection::DatabasePool;
use crate::memory::MemoryDirectory;
use crate::migration::run_migrations;
use crate::repositories::PgStore;
use crate::store::{CredentialRecord, CredentialStore, RecordStore};

/// Wraps the configured credential and record stores.
///
/// The backend is selected at construction time based on configuration.
#[derive(Clone)]
pub struct StoreManager {
    credentials: Arc<dyn CredentialStore>,
    records: Arc<dyn RecordStore>,
    backend: DatabaseBackend,
}

impl std::fmt::Debug for StoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreManager")
            .field("backend", &self.backend)
            .finish()
    }
}

impl StoreManager {
    /// Create a store manager from configuration.
    ///
    /// For PostgreSQL this connects the pool and applies pending migrations.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::from_memory(MemoryDirectory::new()))
            }
            DatabaseBackend::Postgres => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self::from_pool(pool))
            }
        }
    }

    /// Create a store manager over an in-memory directory.
    pub fn from_memory(directory: MemoryDirectory) -> Self {
        let directory = Arc::new(directory);
        Self {
            credentials: directory.clone(),
            records: directory,
            backend: DatabaseBackend::Memory,
        }
    }

    /// Create a store manager over a connected PostgreSQL pool.
    pub fn from_pool(pool: DatabasePool) -> Self {
        let store = Arc::new(PgStore::new(pool.into_pool()));
        Self {
            credentials: store.clone(),
            records: store,
            backend: DatabaseBackend::Postgres,
        }
    }

    /// Returns the active backend.
    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }
}

#[async_trait]
impl CredentialStore for StoreManager {
    async fn find_credentials(
        &self,
        kind: PrincipalKind,
        identifier: &str,
        company: Option<CompanyId>,
    ) -> AppResult<Vec<CredentialRecord>> {
        self.credentials
            .find_credentials(kind, identifier, company)
            .await
    }
}

#[async_trait]
impl RecordStore for StoreManager {
    async fn find_company(&self, id: CompanyId) -> AppResult<Option<Company>> {
        self.records.find_company(id).await
    }

    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>> {
        self.records.find_project(id).await
    }

    async fn list_projects(&self, company: CompanyId) -> AppResult<Vec<Project>> {
        self.records.list_projects(company).await
    }

    async fn find_contractor(&self, id: IdentityId) -> AppResult<Option<ContractorIdentity>> {
        self.records.find_contractor(id).await
    }

    async fn list_contractors(&self, company: CompanyId) -> AppResult<Vec<ContractorIdentity>> {
        self.records.list_contractors(company).await
    }

    async fn find_timesheet(&self, id: TimesheetId) -> AppResult<Option<Timesheet>> {
        self.records.find_timesheet(id).await
    }

    async fn list_timesheets(
        &self,
        company: CompanyId,
        contractor: Option<IdentityId>,
    ) -> AppResult<Vec<Timesheet>> {
        self.records.list_timesheets(company, contractor).await
    }
}
