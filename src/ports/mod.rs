//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiderProfileRepository` - Persistence of scored submissions
//! - `EventPublisher` - Publishing domain events

mod event_publisher;
mod rider_profile_repository;

pub use event_publisher::EventPublisher;
pub use rider_profile_repository::RiderProfileRepository;
