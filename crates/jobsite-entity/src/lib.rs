//! # jobsite-entity
//!
//! Domain entity models for JobSite Gateway. Every struct in this crate
//! represents a database table row or a domain value object. Every record
//! that belongs to a company implements [`TenantScoped`].

pub mod company;
pub mod credential;
pub mod identity;
pub mod record;

pub use company::Company;
pub use credential::Credential;
pub use identity::{AdminIdentity, ContractorIdentity, Identity, PrincipalKind};
pub use record::{Project, TenantScoped, Timesheet};
