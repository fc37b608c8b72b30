//! Storage backends for the `EventRepository` trait.

pub mod in_memory;

pub use in_memory::InMemoryEventRepository;
