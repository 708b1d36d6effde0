//! Authenticated identities: admins and contractors.

pub mod admin;
pub mod contractor;
pub mod kind;

pub use admin::AdminIdentity;
pub use contractor::ContractorIdentity;
pub use kind::PrincipalKind;

use serde::{Deserialize, Serialize};

use jobsite_core::types::{CompanyId, IdentityId};

/// Either kind of identity, as verified at login and embedded in tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Identity {
    /// An administrator.
    Admin(AdminIdentity),
    /// A contractor, possibly a foreman.
    Contractor(ContractorIdentity),
}

impl Identity {
    /// Returns the identity ID.
    pub fn id(&self) -> IdentityId {
        match self {
            Self::Admin(a) => a.id,
            Self::Contractor(c) => c.id,
        }
    }

    /// Returns the owning company.
    pub fn company_id(&self) -> CompanyId {
        match self {
            Self::Admin(a) => a.company_id,
            Self::Contractor(c) => c.company_id,
        }
    }

    /// Returns which login surface this identity belongs to.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::Admin(_) => PrincipalKind::Admin,
            Self::Contractor(_) => PrincipalKind::Contractor,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Admin(a) => &a.display_name,
            Self::Contractor(c) => &c.display_name,
        }
    }

    /// Returns the employee ID.
    pub fn employee_id(&self) -> &str {
        match self {
            Self::Admin(a) => &a.employee_id,
            Self::Contractor(c) => &c.employee_id,
        }
    }
}

impl From<AdminIdentity> for Identity {
    fn from(value: AdminIdentity) -> Self {
        Self::Admin(value)
    }
}

impl From<ContractorIdentity> for Identity {
    fn from(value: ContractorIdentity) -> Self {
        Self::Contractor(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contractor() -> ContractorIdentity {
        ContractorIdentity {
            id: IdentityId::new(),
            company_id: CompanyId::new(),
            display_name: "Rosa Diaz".to_string(),
            employee_id: "C-104".to_string(),
            role: "ironworker".to_string(),
            is_foreman: true,
            locale: "es".to_string(),
        }
    }

    #[test]
    fn test_accessors() {
        let c = contractor();
        let identity = Identity::from(c.clone());
        assert_eq!(identity.id(), c.id);
        assert_eq!(identity.company_id(), c.company_id);
        assert_eq!(identity.kind(), PrincipalKind::Contractor);
        assert_eq!(identity.display_name(), "Rosa Diaz");
        assert_eq!(identity.employee_id(), "C-104");
    }

    #[test]
    fn test_tagged_json() {
        let identity = Identity::from(contractor());
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["kind"], "contractor");
        assert_eq!(json["isForeman"], true);
        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, identity);
    }
}
