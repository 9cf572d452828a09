//! Use cases (application services)

pub mod voting_service;
