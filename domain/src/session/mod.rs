//! Voting session domain.
//!
//! - [`entities::Session`]: a multi-round voting process for one decision
//! - [`status::SessionStatus`] / [`status::SessionAction`]: lifecycle vocabulary
//! - [`state_machine::SessionStateMachine`]: the legal transition table

pub mod entities;
pub mod state_machine;
pub mod status;
