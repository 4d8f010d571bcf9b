//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations
//! - `profile` - Rider profile repositories (in-memory, JSON files)

pub mod events;
pub mod profile;

pub use events::InMemoryEventBus;
pub use profile::{FsRiderProfileRepository, InMemoryRiderProfileRepository};
