//! Login credential verification.
//!
//! Each login surface owns a [`CredentialSource`]. The admin surface can be
//! backed by the configured bootstrap identity or by the store; the
//! contractor surface is always backed by the store. Swapping the source
//! does not change [`CredentialVerifier`].

pub mod bootstrap;
pub mod stored;

pub use bootstrap::BootstrapAdminSource;
pub use stored::StoredCredentialSource;

use std::sync::Arc;

use async_trait::async_trait;

use jobsite_core::result::AppResult;
use jobsite_core::types::CompanyId;
use jobsite_entity::{Identity, PrincipalKind};

use crate::error::AuthError;

/// Where a login surface looks up credentials.
#[async_trait]
pub trait CredentialSource: Send + Sync + 'static {
    /// The login surface this source serves.
    fn kind(&self) -> PrincipalKind;

    /// Returns the identity when `identifier` and `secret` match exactly one
    /// credential, `None` on any mismatch. `Err` is reserved for backend
    /// failures.
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
        tenant_hint: Option<CompanyId>,
    ) -> AppResult<Option<Identity>>;
}

/// Verifies login attempts against a [`CredentialSource`].
#[derive(Clone)]
pub struct CredentialVerifier {
    source: Arc<dyn CredentialSource>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("kind", &self.source.kind())
            .finish()
    }
}

impl CredentialVerifier {
    /// Creates a verifier over `source`.
    pub fn new(source: Arc<dyn CredentialSource>) -> Self {
        Self { source }
    }

    /// The login surface this verifier serves.
    pub fn kind(&self) -> PrincipalKind {
        self.source.kind()
    }

    /// Verifies `identifier` and `secret`.
    ///
    /// Every rejection is the same [`AuthError::InvalidCredentials`]; only
    /// a backend failure produces a different error.
    pub async fn verify(
        &self,
        identifier: &str,
        secret: &str,
        tenant_hint: Option<CompanyId>,
    ) -> AppResult<Identity> {
        let kind = self.source.kind();

        if identifier.trim().is_empty() || secret.is_empty() {
            tracing::info!(target: "audit", %kind, "Login rejected: empty identifier or PIN");
            return Err(AuthError::InvalidCredentials.into());
        }

        match self.source.authenticate(identifier, secret, tenant_hint).await? {
            Some(identity) => {
                tracing::info!(
                    target: "audit",
                    %kind,
                    identity_id = %identity.id(),
                    company_id = %identity.company_id(),
                    "Login succeeded"
                );
                Ok(identity)
            }
            None => {
                tracing::info!(target: "audit", %kind, identifier, "Login rejected");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }
}
