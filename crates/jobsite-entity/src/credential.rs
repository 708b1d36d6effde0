//! Login credential entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobsite_core::types::{CompanyId, CredentialId, IdentityId};

use crate::identity::PrincipalKind;

/// A login credential: an identifier plus a hashed secret.
///
/// The identifier (employee ID) is unique within `(company_id, kind)`,
/// never globally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Unique credential identifier.
    pub id: CredentialId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Identity this credential logs in as.
    pub identity_id: IdentityId,
    /// Which login surface accepts this credential.
    pub kind: PrincipalKind,
    /// Employee ID typed into the login form.
    pub identifier: String,
    /// Argon2id PHC string of the PIN.
    #[serde(skip_serializing)]
    pub secret_hash: String,
}
