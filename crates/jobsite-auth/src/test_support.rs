//! Shared identity fixtures for unit tests.

use jobsite_core::types::{CompanyId, IdentityId};
use jobsite_entity::{AdminIdentity, ContractorIdentity, Identity};

pub(crate) fn admin_in(company_id: CompanyId) -> Identity {
    Identity::Admin(AdminIdentity {
        id: IdentityId::new(),
        company_id,
        display_name: "Site Administrator".to_string(),
        employee_id: "admin001".to_string(),
        locale: "en".to_string(),
    })
}

pub(crate) fn contractor_in(company_id: CompanyId, is_foreman: bool) -> Identity {
    Identity::Contractor(ContractorIdentity {
        id: IdentityId::new(),
        company_id,
        display_name: "Lena Marsh".to_string(),
        employee_id: "C-310".to_string(),
        role: "electrician".to_string(),
        is_foreman,
        locale: "en".to_string(),
    })
}

pub(crate) fn admin_identity() -> Identity {
    admin_in(CompanyId::new())
}

pub(crate) fn contractor_identity(is_foreman: bool) -> Identity {
    contractor_in(CompanyId::new(), is_foreman)
}
