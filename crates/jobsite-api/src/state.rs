//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use jobsite_auth::{
    BootstrapAdminSource, CredentialSource, CredentialVerifier, PinHasher, RouteGuard,
    SessionResolver, StoredCredentialSource, TokenIssuer,
};
use jobsite_core::config::{AdminSource, AppConfig, SigningSecret};
use jobsite_core::result::AppResult;
use jobsite_database::StoreManager;
use jobsite_entity::PrincipalKind;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential and record stores.
    pub store: StoreManager,
    /// Admin login verifier.
    pub admin_verifier: Arc<CredentialVerifier>,
    /// Contractor login verifier.
    pub contractor_verifier: Arc<CredentialVerifier>,
    /// Session token issuer.
    pub issuer: Arc<TokenIssuer>,
    /// Session token resolver.
    pub resolver: Arc<SessionResolver>,
    /// Tenant and capability guard.
    pub guard: RouteGuard,
}

impl AppState {
    /// Builds the state, resolving the signing secret from configuration.
    pub fn new(config: AppConfig, store: StoreManager) -> AppResult<Self> {
        let secret = config.signing_secret()?;
        Self::with_secret(config, store, &secret)
    }

    /// Builds the state with an explicit signing secret.
    pub fn with_secret(
        config: AppConfig,
        store: StoreManager,
        secret: &SigningSecret,
    ) -> AppResult<Self> {
        let hasher = PinHasher::new();
        let credentials = Arc::new(store.clone());

        let admin_source: Arc<dyn CredentialSource> = match config.auth.admin_source {
            AdminSource::Bootstrap => {
                tracing::warn!(
                    employee_id = %config.auth.bootstrap_admin.employee_id,
                    "Admin login uses the configured bootstrap identity"
                );
                Arc::new(BootstrapAdminSource::new(
                    &config.auth.bootstrap_admin,
                    hasher.clone(),
                )?)
            }
            AdminSource::Store => Arc::new(StoredCredentialSource::new(
                PrincipalKind::Admin,
                credentials.clone(),
                hasher.clone(),
            )?),
        };
        let contractor_source =
            StoredCredentialSource::new(PrincipalKind::Contractor, credentials, hasher)?;

        Ok(Self {
            issuer: Arc::new(TokenIssuer::new(secret, config.auth.token_ttl_seconds()?)?),
            resolver: Arc::new(SessionResolver::new(secret)),
            admin_verifier: Arc::new(CredentialVerifier::new(admin_source)),
            contractor_verifier: Arc::new(CredentialVerifier::new(Arc::new(contractor_source))),
            guard: RouteGuard::new(),
            config: Arc::new(config),
            store,
        })
    }

    /// Cookie name for the token namespace of `kind`.
    pub fn cookie_name(&self, kind: PrincipalKind) -> &str {
        match kind {
            PrincipalKind::Admin => &self.config.auth.admin_cookie_name,
            PrincipalKind::Contractor => &self.config.auth.contractor_cookie_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use jobsite_core::error::ErrorKind;
    use jobsite_database::MemoryDirectory;

    use super::*;

    fn build(token_ttl_hours: u64) -> AppResult<AppState> {
        let mut config = AppConfig::default();
        config.auth.token_ttl_hours = token_ttl_hours;
        AppState::with_secret(
            config,
            StoreManager::from_memory(MemoryDirectory::new()),
            &SigningSecret::new("state-secret"),
        )
    }

    #[test]
    fn test_unusable_ttl_refuses_to_start() {
        for hours in [0, u64::MAX] {
            let err = build(hours).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Configuration);
        }
    }

    #[test]
    fn test_cookie_names_per_namespace() {
        let state = build(24).unwrap();
        assert_eq!(state.issuer.ttl_seconds(), 86_400);
        assert_eq!(state.cookie_name(PrincipalKind::Admin), "adminAuthToken");
        assert_eq!(state.cookie_name(PrincipalKind::Contractor), "authToken");
    }
}
