//! # jobsite-database
//!
//! Credential and business-record storage for JobSite Gateway: the store
//! traits consumed by the auth and API layers, a PostgreSQL implementation
//! built from per-table repositories, and an in-memory directory for
//! development and tests.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use memory::MemoryDirectory;
pub use store::{CredentialRecord, CredentialStore, RecordStore};
