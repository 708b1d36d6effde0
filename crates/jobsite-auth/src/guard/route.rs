//! Route classes.
//!
//! Every route is registered with exactly one class. `Public` is never a
//! default: a route only skips authentication when it is listed as public.

use std::fmt;

use jobsite_entity::PrincipalKind;

use crate::principal::Capability;

/// Enforcement applied to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// No authentication.
    Public,
    /// Admin token and the admin console capability.
    Admin,
    /// Contractor token and the contractor portal capability.
    Contractor,
    /// Contractor token and the foreman capability.
    Foreman,
    /// Either token, selected by the `authType` query parameter.
    Shared,
}

impl RouteClass {
    /// The token namespace the class reads. `None` for public routes and
    /// for shared routes, whose namespace is chosen per request.
    pub fn namespace(&self) -> Option<PrincipalKind> {
        match self {
            Self::Admin => Some(PrincipalKind::Admin),
            Self::Contractor | Self::Foreman => Some(PrincipalKind::Contractor),
            Self::Public | Self::Shared => None,
        }
    }

    /// The capability a session must hold. `None` for public routes.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Self::Public => None,
            Self::Admin => Some(Capability::AdminConsole),
            Self::Contractor => Some(Capability::ContractorPortal),
            Self::Foreman => Some(Capability::ForemanManagement),
            Self::Shared => Some(Capability::TenantRecords),
        }
    }

    /// Whether the class requires a token.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Public)
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Admin => "admin",
            Self::Contractor => "contractor",
            Self::Foreman => "foreman",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for RouteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
