//! Core domain concepts shared across all subdomains.
//!
//! - [`ids::SessionId`] / [`ids::RoundId`]: opaque identifiers
//! - [`error::DomainError`]: domain-level errors and their [`error::ErrorKind`]

pub mod error;
pub mod ids;
