//! Authorization decisions for authenticated sessions.

pub mod route;

pub use route::RouteClass;

use jobsite_core::types::CompanyId;

use crate::error::AuthError;
use crate::jwt::ResolvedSession;
use crate::principal::Capability;

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The resource belongs to another company.
    TenantMismatch,
    /// The principal lacks a required capability.
    MissingCapability(Capability),
}

/// Outcome of [`RouteGuard::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The handler may run.
    Allow,
    /// The request must be rejected.
    Deny(DenyReason),
}

impl Decision {
    /// Whether the decision allows the request.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Maps a denial onto the auth error taxonomy.
    pub fn into_result(self) -> Result<(), AuthError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::TenantMismatch) => Err(AuthError::TenantMismatch),
            Self::Deny(DenyReason::MissingCapability(c)) => Err(AuthError::MissingCapability(c)),
        }
    }
}

/// Enforces tenant isolation and capability checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Creates a guard.
    pub fn new() -> Self {
        Self
    }

    /// Decides whether `session` may use `required` on a resource owned by
    /// `resource_company`.
    ///
    /// The tenant check runs first and applies to every principal kind.
    pub fn authorize(
        &self,
        session: &ResolvedSession,
        resource_company: CompanyId,
        required: Capability,
    ) -> Decision {
        let decision = if session.company_id != resource_company {
            Decision::Deny(DenyReason::TenantMismatch)
        } else if !session.principal.has(required) {
            Decision::Deny(DenyReason::MissingCapability(required))
        } else {
            Decision::Allow
        };

        if let Decision::Deny(reason) = decision {
            tracing::info!(
                target: "audit",
                identity_id = %session.principal.id(),
                session_company = %session.company_id,
                %resource_company,
                ?reason,
                "Authorization denied"
            );
        }
        decision
    }

    /// Checks `required` against the session's own company.
    pub fn require(&self, session: &ResolvedSession, required: Capability) -> Decision {
        self.authorize(session, session.company_id, required)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::principal::Principal;
    use crate::test_support::{admin_in, contractor_in};

    fn session(identity: jobsite_entity::Identity) -> ResolvedSession {
        let now = Utc::now();
        ResolvedSession {
            company_id: identity.company_id(),
            principal: Principal::from(identity),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(24),
        }
    }

    fn all_sessions(company: CompanyId) -> Vec<ResolvedSession> {
        vec![
            session(admin_in(company)),
            session(contractor_in(company, false)),
            session(contractor_in(company, true)),
        ]
    }

    #[test]
    fn test_tenant_mismatch_denies_every_role() {
        let home = CompanyId::new();
        let other = CompanyId::new();
        let guard = RouteGuard::new();

        for s in all_sessions(home) {
            for capability in Capability::ALL {
                assert_eq!(
                    guard.authorize(&s, other, capability),
                    Decision::Deny(DenyReason::TenantMismatch),
                    "{:?} on {capability}",
                    s.principal.kind()
                );
            }
        }
    }

    #[test]
    fn test_same_tenant_follows_capabilities() {
        let home = CompanyId::new();
        let guard = RouteGuard::new();

        for s in all_sessions(home) {
            for capability in Capability::ALL {
                let decision = guard.authorize(&s, home, capability);
                assert_eq!(decision.is_allowed(), s.principal.has(capability));
            }
        }
    }

    #[test]
    fn test_foreman_gate() {
        let home = CompanyId::new();
        let guard = RouteGuard::new();
        let plain = session(contractor_in(home, false));
        let foreman = session(contractor_in(home, true));

        assert_eq!(
            guard.require(&plain, Capability::ForemanManagement),
            Decision::Deny(DenyReason::MissingCapability(Capability::ForemanManagement))
        );
        assert_eq!(
            guard.require(&foreman, Capability::ForemanManagement),
            Decision::Allow
        );
    }

    #[test]
    fn test_admin_cannot_use_contractor_portal() {
        let home = CompanyId::new();
        let admin = session(admin_in(home));
        assert!(!RouteGuard::new()
            .require(&admin, Capability::ContractorPortal)
            .is_allowed());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Decision::Allow.into_result(), Ok(()));
        assert_eq!(
            Decision::Deny(DenyReason::TenantMismatch).into_result(),
            Err(AuthError::TenantMismatch)
        );
    }
}
