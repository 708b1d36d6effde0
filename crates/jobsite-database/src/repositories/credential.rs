//! Credential repository implementation.

use sqlx::PgPool;

use jobsite_core::error::{AppError, ErrorKind};
use jobsite_core::result::AppResult;
use jobsite_core::types::CompanyId;
use jobsite_entity::{Credential, PrincipalKind};

const COLUMNS: &str = "id, company_id, identity_id, kind, identifier, secret_hash";

/// Repository for login credentials.
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    pool: PgPool,
}

impl CredentialRepository {
    /// Create a new credential repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find credentials by identifier, optionally within one company.
    pub async fn find_by_identifier(
        &self,
        kind: PrincipalKind,
        identifier: &str,
        company: Option<CompanyId>,
    ) -> AppResult<Vec<Credential>> {
        let result = match company {
            Some(company_id) => {
                sqlx::query_as::<_, Credential>(&format!(
                    "SELECT {COLUMNS} FROM credentials \
                     WHERE kind = $1 AND identifier = $2 AND company_id = $3"
                ))
                .bind(kind)
                .bind(identifier)
                .bind(company_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Credential>(&format!(
                    "SELECT {COLUMNS} FROM credentials WHERE kind = $1 AND identifier = $2"
                ))
                .bind(kind)
                .bind(identifier)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find credential", e)
        })
    }
}
