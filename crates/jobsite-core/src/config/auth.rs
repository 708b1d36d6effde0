//! Authentication configuration and signing secret resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::app::Environment;
use crate::error::AppError;

/// Secret substituted when no signing secret is configured in development.
pub const DEV_FALLBACK_SECRET: &str = "jobsite-development-only-signing-secret";

/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_TTL_HOURS: u64 = 8760;

/// Which credential source backs the admin login surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminSource {
    /// A single configured bootstrap admin identity.
    #[default]
    Bootstrap,
    /// Tenant-scoped admin credentials from the store.
    Store,
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required in production.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Session token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Cookie carrying the admin token.
    #[serde(default = "default_admin_cookie")]
    pub admin_cookie_name: String,
    /// Cookie carrying the contractor token.
    #[serde(default = "default_contractor_cookie")]
    pub contractor_cookie_name: String,
    /// Credential source for admin logins.
    #[serde(default)]
    pub admin_source: AdminSource,
    /// Bootstrap admin identity, used when `admin_source = "bootstrap"`.
    #[serde(default)]
    pub bootstrap_admin: BootstrapAdminConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: default_token_ttl(),
            admin_cookie_name: default_admin_cookie(),
            contractor_cookie_name: default_contractor_cookie(),
            admin_source: AdminSource::default(),
            bootstrap_admin: BootstrapAdminConfig::default(),
        }
    }
}

/// The fixed admin identity accepted by the bootstrap admin login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdminConfig {
    /// Employee ID typed into the login form.
    #[serde(default = "default_admin_employee_id")]
    pub employee_id: String,
    /// PIN for the bootstrap admin.
    #[serde(default = "default_admin_pin")]
    pub pin: String,
    /// Company the bootstrap admin administers.
    #[serde(default = "default_admin_company")]
    pub company_id: String,
    /// Stable identity ID for the bootstrap admin.
    #[serde(default = "default_admin_identity")]
    pub identity_id: String,
    /// Display name.
    #[serde(default = "default_admin_name")]
    pub display_name: String,
    /// UI locale.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for BootstrapAdminConfig {
    fn default() -> Self {
        Self {
            employee_id: default_admin_employee_id(),
            pin: default_admin_pin(),
            company_id: default_admin_company(),
            identity_id: default_admin_identity(),
            display_name: default_admin_name(),
            locale: default_locale(),
        }
    }
}

/// The HMAC key used to sign and verify session tokens.
///
/// Constructed once at startup and handed to the issuer and resolver.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap raw secret bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns whether this is the development fallback secret.
    pub fn is_dev_fallback(&self) -> bool {
        self.0 == DEV_FALLBACK_SECRET.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
    }
}

impl AuthConfig {
    /// Resolves the signing secret for the given environment.
    ///
    /// In development a missing secret is replaced by [`DEV_FALLBACK_SECRET`].
    /// In production a missing secret, or the fallback itself, is a
    /// configuration error.
    pub fn signing_secret(&self, environment: Environment) -> Result<SigningSecret, AppError> {
        let configured = self
            .jwt_secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match (configured, environment) {
            (Some(secret), Environment::Production) if secret == DEV_FALLBACK_SECRET => {
                Err(AppError::configuration(
                    "auth.jwt_secret is set to the development fallback in production",
                ))
            }
            (Some(secret), _) => Ok(SigningSecret::new(secret.as_bytes().to_vec())),
            (None, Environment::Production) => Err(AppError::configuration(
                "auth.jwt_secret must be set in production",
            )),
            (None, Environment::Development) => {
                warn!("auth.jwt_secret is not set; using the development fallback secret");
                Ok(SigningSecret::new(DEV_FALLBACK_SECRET.as_bytes().to_vec()))
            }
        }
    }

    /// Token lifetime in seconds.
    ///
    /// `token_ttl_hours` must lie in `1..=MAX_TOKEN_TTL_HOURS`.
    pub fn token_ttl_seconds(&self) -> Result<i64, AppError> {
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}, got {}",
                self.token_ttl_hours
            )));
        }
        i64::try_from(self.token_ttl_hours)
            .ok()
            .and_then(|hours| hours.checked_mul(3600))
            .ok_or_else(|| AppError::configuration("auth.token_ttl_hours is out of range"))
    }
}

fn default_token_ttl() -> u64 {
    24
}

fn default_admin_cookie() -> String {
    "adminAuthToken".to_string()
}

fn default_contractor_cookie() -> String {
    "authToken".to_string()
}

fn default_admin_employee_id() -> String {
    "admin001".to_string()
}

fn default_admin_pin() -> String {
    "1234".to_string()
}

fn default_admin_company() -> String {
    "00000000-0000-0000-0000-000000000001".to_string()
}

fn default_admin_identity() -> String {
    "00000000-0000-0000-0000-0000000000a1".to_string()
}

fn default_admin_name() -> String {
    "Site Administrator".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}
