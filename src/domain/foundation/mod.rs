//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, command metadata, event plumbing and the
//! error types used across the Nebachiv domain.

mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::{SubmissionId, UserId};
pub use timestamp::Timestamp;
