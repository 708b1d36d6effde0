//! Core type definitions used across the JobSite workspace.

pub mod id;

pub use id::*;
