//! Capabilities granted to principals.

use std::fmt;

use serde::Serialize;

/// A permission a route may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The admin console routes.
    AdminConsole,
    /// The contractor's own portal routes.
    ContractorPortal,
    /// Company records reachable from either surface.
    TenantRecords,
    /// Crew management, held by foremen.
    ForemanManagement,
}

impl Capability {
    /// Every capability, in bit order.
    pub const ALL: [Capability; 4] = [
        Capability::AdminConsole,
        Capability::ContractorPortal,
        Capability::TenantRecords,
        Capability::ForemanManagement,
    ];

    fn bit(self) -> u8 {
        match self {
            Self::AdminConsole => 1,
            Self::ContractorPortal => 1 << 1,
            Self::TenantRecords => 1 << 2,
            Self::ForemanManagement => 1 << 3,
        }
    }

    /// Returns the snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminConsole => "admin_console",
            Self::ContractorPortal => "contractor_portal",
            Self::TenantRecords => "tenant_records",
            Self::ForemanManagement => "foreman_management",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from a slice.
    pub fn of(capabilities: &[Capability]) -> Self {
        capabilities
            .iter()
            .fold(Self::empty(), |set, c| set.with(*c))
    }

    /// Returns this set with `capability` added.
    pub fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    /// Whether `capability` is in the set.
    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Iterates the capabilities in the set.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }
}
