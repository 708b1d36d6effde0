//! Business records owned by a company.

pub mod project;
pub mod timesheet;

pub use project::Project;
pub use timesheet::Timesheet;

use jobsite_core::types::CompanyId;

use crate::identity::{AdminIdentity, ContractorIdentity};

/// Anything that belongs to exactly one company.
pub trait TenantScoped {
    /// The owning company.
    fn company_id(&self) -> CompanyId;
}

impl TenantScoped for Project {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

impl TenantScoped for Timesheet {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

impl TenantScoped for ContractorIdentity {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }
}

impl TenantScoped for AdminIdentity {
    fn company_id(&self) -> CompanyId {
        self.company_id
    }
}
