//! In-memory implementation of the `EventRepository` trait.
//!
//! All events live in a single `Vec` behind one mutex. Reads take the same
//! exclusive lock as writes, and no lock is held across an `.await`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, warn};

use eventdesk_core::error::DomainError;
use eventdesk_core::event::{Event, EventPatch};
use eventdesk_core::id::EventId;
use eventdesk_core::repository::EventRepository;

/// Event repository that keeps every event in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Event>>, DomainError> {
        self.events.lock().map_err(|_| {
            warn!("event repository lock poisoned");
            DomainError::Infrastructure("event repository lock poisoned".into())
        })
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get(&self, id: EventId) -> Result<Option<Event>, DomainError> {
        let events = self.lock()?;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.lock()?.clone())
    }

    async fn set(&self, event: Event) -> Result<(), DomainError> {
        let mut events = self.lock()?;
        if let Some(existing) = events.iter_mut().find(|e| e.id == event.id) {
            debug!(event_id = %event.id, "replacing event");
            *existing = event;
        } else {
            debug!(event_id = %event.id, "inserting event");
            events.push(event);
        }
        Ok(())
    }

    async fn delete(&self, id: EventId) -> Result<(), DomainError> {
        let mut events = self.lock()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        debug!(event_id = %id, removed = before - events.len(), "deleted event");
        Ok(())
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Option<Event>, DomainError> {
        let mut events = self.lock()?;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        event.apply(patch);
        debug!(event_id = %id, "updated event");
        Ok(Some(event.clone()))
    }
}
