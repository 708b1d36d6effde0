//! Credentials looked up in the data store.

use std::sync::Arc;

use async_trait::async_trait;

use jobsite_core::error::AppError;
use jobsite_core::result::AppResult;
use jobsite_core::types::CompanyId;
use jobsite_database::CredentialStore;
use jobsite_entity::{Identity, PrincipalKind};

use super::CredentialSource;
use crate::password::PinHasher;

/// Tenant-scoped credentials of one kind, read from a [`CredentialStore`].
#[derive(Clone)]
pub struct StoredCredentialSource {
    kind: PrincipalKind,
    store: Arc<dyn CredentialStore>,
    hasher: PinHasher,
    dummy_hash: String,
}

impl std::fmt::Debug for StoredCredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentialSource")
            .field("kind", &self.kind)
            .finish()
    }
}

impl StoredCredentialSource {
    /// Creates a source for `kind` credentials.
    pub fn new(
        kind: PrincipalKind,
        store: Arc<dyn CredentialStore>,
        hasher: PinHasher,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_pin("jobsite-unmatched-login")?;
        Ok(Self {
            kind,
            store,
            hasher,
            dummy_hash,
        })
    }
}

#[async_trait]
impl CredentialSource for StoredCredentialSource {
    fn kind(&self) -> PrincipalKind {
        self.kind
    }

    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
        tenant_hint: Option<CompanyId>,
    ) -> AppResult<Option<Identity>> {
        let mut matches = self
            .store
            .find_credentials(self.kind, identifier, tenant_hint)
            .await?;

        if matches.len() != 1 {
            if matches.len() > 1 {
                tracing::info!(
                    target: "audit",
                    kind = %self.kind,
                    count = matches.len(),
                    "Identifier matches several companies and no company was given"
                );
            }
            self.hasher.verify_pin(secret, &self.dummy_hash)?;
            return Ok(None);
        }

        let Some(record) = matches.pop() else {
            return Ok(None);
        };

        if self.hasher.verify_pin(secret, &record.credential.secret_hash)? {
            Ok(Some(record.identity))
        } else {
            Ok(None)
        }
    }
}
