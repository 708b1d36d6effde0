//! Authenticated principals and their capabilities.
//!
//! Route checks are written once against [`Principal`]; the admin and
//! contractor variants differ only in the capability set they grant.

pub mod capability;

pub use capability::{Capability, CapabilitySet};

use serde::Serialize;

use jobsite_core::types::{CompanyId, IdentityId};
use jobsite_entity::{AdminIdentity, ContractorIdentity, Identity, PrincipalKind};

/// An authenticated administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminPrincipal {
    /// Identity snapshot from the token.
    pub identity: AdminIdentity,
}

/// An authenticated contractor or foreman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractorPrincipal {
    /// Identity snapshot from the token.
    pub identity: ContractorIdentity,
}

impl ContractorPrincipal {
    /// Whether this contractor holds the foreman capability.
    pub fn is_foreman(&self) -> bool {
        self.identity.is_foreman
    }
}

/// Either kind of authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Principal {
    /// Administrator surface.
    Admin(AdminPrincipal),
    /// Contractor surface.
    Contractor(ContractorPrincipal),
}

impl Principal {
    /// Returns the identity ID.
    pub fn id(&self) -> IdentityId {
        match self {
            Self::Admin(p) => p.identity.id,
            Self::Contractor(p) => p.identity.id,
        }
    }

    /// Returns the company this principal is bound to.
    pub fn company_id(&self) -> CompanyId {
        match self {
            Self::Admin(p) => p.identity.company_id,
            Self::Contractor(p) => p.identity.company_id,
        }
    }

    /// Returns the token namespace of this principal.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::Admin(_) => PrincipalKind::Admin,
            Self::Contractor(_) => PrincipalKind::Contractor,
        }
    }

    /// Returns the capabilities this principal holds.
    pub fn capabilities(&self) -> CapabilitySet {
        match self {
            Self::Admin(_) => {
                CapabilitySet::of(&[Capability::AdminConsole, Capability::TenantRecords])
            }
            Self::Contractor(p) => {
                let base = CapabilitySet::of(&[
                    Capability::ContractorPortal,
                    Capability::TenantRecords,
                ]);
                if p.is_foreman() {
                    base.with(Capability::ForemanManagement)
                } else {
                    base
                }
            }
        }
    }

    /// Whether this principal holds `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Whether this principal may see every record of its company rather
    /// than only its own.
    pub fn sees_whole_company(&self) -> bool {
        self.has(Capability::AdminConsole) || self.has(Capability::ForemanManagement)
    }

    /// Returns the contractor principal, if any.
    pub fn as_contractor(&self) -> Option<&ContractorPrincipal> {
        match self {
            Self::Contractor(p) => Some(p),
            Self::Admin(_) => None,
        }
    }

    /// Returns the identity snapshot.
    pub fn identity(&self) -> Identity {
        match self {
            Self::Admin(p) => Identity::Admin(p.identity.clone()),
            Self::Contractor(p) => Identity::Contractor(p.identity.clone()),
        }
    }
}

impl From<Identity> for Principal {
    fn from(identity: Identity) -> Self {
        match identity {
            Identity::Admin(identity) => Self::Admin(AdminPrincipal { identity }),
            Identity::Contractor(identity) => Self::Contractor(ContractorPrincipal { identity }),
        }
    }
}
