//! Rider profile adapters - implementations of `RiderProfileRepository`.

mod filesystem;
mod in_memory;

pub use filesystem::FsRiderProfileRepository;
pub use in_memory::InMemoryRiderProfileRepository;
