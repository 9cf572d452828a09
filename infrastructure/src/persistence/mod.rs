//! Session storage adapters
//!
//! Both adapters implement [`SessionRepository`](chorus_application::SessionRepository)
//! with whole-value load/save semantics and generate ids on creation.

mod json_file;
mod memory;
mod snapshot;

pub use json_file::JsonFileSessionRepository;
pub use memory::InMemorySessionRepository;
