//! The configured bootstrap admin.

use async_trait::async_trait;

use jobsite_core::config::BootstrapAdminConfig;
use jobsite_core::error::AppError;
use jobsite_core::result::AppResult;
use jobsite_core::types::{CompanyId, IdentityId};
use jobsite_entity::{AdminIdentity, Identity, PrincipalKind};

use super::CredentialSource;
use crate::password::PinHasher;

/// A single admin identity taken from configuration.
///
/// The configured PIN is hashed once at construction and never kept in
/// plaintext.
#[derive(Debug, Clone)]
pub struct BootstrapAdminSource {
    identity: AdminIdentity,
    pin_hash: String,
    hasher: PinHasher,
}

impl BootstrapAdminSource {
    /// Builds the source from configuration.
    pub fn new(config: &BootstrapAdminConfig, hasher: PinHasher) -> Result<Self, AppError> {
        let company_id: CompanyId = config.company_id.parse().map_err(|_| {
            AppError::configuration("auth.bootstrap_admin.company_id is not a UUID")
        })?;
        let id: IdentityId = config.identity_id.parse().map_err(|_| {
            AppError::configuration("auth.bootstrap_admin.identity_id is not a UUID")
        })?;
        if config.employee_id.trim().is_empty() || config.pin.is_empty() {
            return Err(AppError::configuration(
                "auth.bootstrap_admin requires an employee_id and a pin",
            ));
        }

        Ok(Self {
            identity: AdminIdentity {
                id,
                company_id,
                display_name: config.display_name.clone(),
                employee_id: config.employee_id.clone(),
                locale: config.locale.clone(),
            },
            pin_hash: hasher.hash_pin(&config.pin)?,
            hasher,
        })
    }

    /// The configured identity.
    pub fn identity(&self) -> &AdminIdentity {
        &self.identity
    }
}

#[async_trait]
impl CredentialSource for BootstrapAdminSource {
    fn kind(&self) -> PrincipalKind {
        PrincipalKind::Admin
    }

    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
        tenant_hint: Option<CompanyId>,
    ) -> AppResult<Option<Identity>> {
        // Always verify so a wrong identifier costs the same as a wrong PIN.
        let pin_ok = self.hasher.verify_pin(secret, &self.pin_hash)?;
        let id_ok = identifier == self.identity.employee_id;
        let tenant_ok = tenant_hint.is_none_or(|c| c == self.identity.company_id);

        Ok((pin_ok && id_ok && tenant_ok).then(|| Identity::Admin(self.identity.clone())))
    }
}
