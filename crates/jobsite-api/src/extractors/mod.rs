//! Custom Axum extractors.

pub mod path;
pub mod session;

pub use path::parse_id;
pub use session::{AdminSession, ContractorSession, ForemanSession, SharedSession};
