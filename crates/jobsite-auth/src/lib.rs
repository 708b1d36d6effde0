//! # jobsite-auth
//!
//! Authentication and authorization gateway for JobSite.
//!
//! ## Modules
//!
//! - `verifier`: checks an employee ID and PIN against a login surface's credential source
//! - `jwt`: session token issuing and resolution
//! - `principal`: admin and contractor principals with their capability sets
//! - `guard`: tenant isolation and capability checks per route
//! - `password`: Argon2id PIN hashing
//! - `error`: the authentication/authorization failure taxonomy

pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod principal;
pub mod verifier;

pub use error::{AuthError, AuthStage};
pub use guard::{Decision, DenyReason, RouteClass, RouteGuard};
pub use jwt::{Claims, IssuedToken, ResolvedSession, SessionResolver, TokenIssuer};
pub use password::PinHasher;
pub use principal::{AdminPrincipal, Capability, CapabilitySet, ContractorPrincipal, Principal};
pub use verifier::{BootstrapAdminSource, CredentialSource, CredentialVerifier, StoredCredentialSource};

#[cfg(test)]
pub(crate) mod test_support;
