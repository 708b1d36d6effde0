//! Session token validation.
//!
//! Resolution is a pure function of the raw token, the current time and
//! the signing secret. Checks run in order: signature and structure, claim
//! consistency, expiry, then the expected role.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use jobsite_core::config::SigningSecret;
use jobsite_core::types::CompanyId;
use jobsite_entity::PrincipalKind;

use super::claims::Claims;
use crate::error::AuthError;
use crate::principal::Principal;

/// A validated session.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    /// The authenticated principal.
    pub principal: Principal,
    /// The company the session is bound to.
    pub company_id: CompanyId,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Validates session tokens.
#[derive(Clone)]
pub struct SessionResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResolver")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionResolver {
    /// Creates a resolver verifying with `secret`.
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `resolve_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Resolves `raw` as of now.
    pub fn resolve(
        &self,
        raw: &str,
        expected: Option<PrincipalKind>,
    ) -> Result<ResolvedSession, AuthError> {
        self.resolve_at(raw, expected, Utc::now())
    }

    /// Resolves `raw` as of `now`.
    pub fn resolve_at(
        &self,
        raw: &str,
        expected: Option<PrincipalKind>,
        now: DateTime<Utc>,
    ) -> Result<ResolvedSession, AuthError> {
        let claims = self.decode_claims(raw)?;

        if !claims.is_consistent() {
            tracing::warn!(target: "audit", sub = %claims.sub, "Token claims are inconsistent");
            return Err(AuthError::InvalidToken);
        }

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        if expected.is_some_and(|kind| kind != claims.role) {
            return Err(AuthError::WrongRole);
        }

        Ok(ResolvedSession {
            company_id: claims.company_id,
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
            principal: Principal::from(claims.principal),
        })
    }

    /// Verifies the signature and decodes claims without any time checks.
    pub fn decode_claims(&self, raw: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(raw, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })
    }
}
