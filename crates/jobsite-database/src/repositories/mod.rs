//! PostgreSQL repositories, one per table, and the [`PgStore`] that
//! composes them behind the store traits.

pub mod admin;
pub mod company;
pub mod contractor;
pub mod credential;
pub mod postgres;
pub mod project;
pub mod timesheet;

pub use admin::AdminRepository;
pub use company::CompanyRepository;
pub use contractor::ContractorRepository;
pub use credential::CredentialRepository;
pub use postgres::PgStore;
pub use project::ProjectRepository;
pub use timesheet::TimesheetRepository;
