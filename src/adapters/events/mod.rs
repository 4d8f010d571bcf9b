//! Event adapters - implementations of the `EventPublisher` port.

mod in_memory;

pub use in_memory::InMemoryEventBus;
