//! JWT claims carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobsite_core::types::{CompanyId, IdentityId};
use jobsite_entity::{Identity, PrincipalKind};

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity ID.
    pub sub: IdentityId,
    /// Company the identity belongs to.
    pub company_id: CompanyId,
    /// Token namespace.
    pub role: PrincipalKind,
    /// Identity snapshot at issue time.
    pub principal: Identity,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `identity` issued at `iat` and expiring at `exp`.
    pub fn new(identity: &Identity, iat: i64, exp: i64) -> Self {
        Self {
            sub: identity.id(),
            company_id: identity.company_id(),
            role: identity.kind(),
            principal: identity.clone(),
            iat,
            exp,
        }
    }

    /// Whether the snapshot agrees with `sub`, `company_id` and `role`.
    pub fn is_consistent(&self) -> bool {
        self.principal.id() == self.sub
            && self.principal.company_id() == self.company_id
            && self.principal.kind() == self.role
            && self.exp > self.iat
    }

    /// Whether the token is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Returns the issued-at as a timestamp.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Returns the expiration as a timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}
