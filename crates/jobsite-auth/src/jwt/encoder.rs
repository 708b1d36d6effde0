//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use jobsite_core::config::SigningSecret;
use jobsite_core::error::{AppError, ErrorKind};
use jobsite_entity::Identity;

use super::claims::Claims;

/// A freshly signed session token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// Compact JWT.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Signs HS256 session tokens with a fixed TTL.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer signing with `secret`. The TTL must be positive.
    pub fn new(secret: &SigningSecret, ttl_seconds: i64) -> Result<Self, AppError> {
        if ttl_seconds <= 0 {
            return Err(AppError::configuration(format!(
                "Token TTL must be positive, got {ttl_seconds}s"
            )));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        })
    }

    /// Returns the token lifetime in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issues a token for `identity` as of now.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token for `identity` as of `now`.
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let iat = now.timestamp();
        let Some(exp) = iat.checked_add(self.ttl_seconds) else {
            return Err(AppError::internal("Token expiry overflows the timestamp range"));
        };
        let claims = Claims::new(identity, iat, exp);

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to sign session token", e)
        })?;

        tracing::debug!(
            identity_id = %claims.sub,
            company_id = %claims.company_id,
            role = %claims.role,
            exp = claims.exp,
            "Session token issued"
        );

        Ok(IssuedToken {
            token,
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        })
    }
}
