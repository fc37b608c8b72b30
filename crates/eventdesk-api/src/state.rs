//! Shared application state.

use std::sync::Arc;

use eventdesk_core::id::{AtomicIdGenerator, IdGenerator};
use eventdesk_core::repository::EventRepository;
use eventdesk_store::InMemoryEventRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage for events.
    pub event_repository: Arc<dyn EventRepository>,
    /// Allocator for new event ids.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            event_repository,
            id_generator,
        }
    }

    /// Create application state backed by an empty in-memory repository and
    /// an id generator starting at 1.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(AtomicIdGenerator::new()),
        )
    }
}
