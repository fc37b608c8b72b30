//! Test repositories — mock `EventRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use eventdesk_core::error::DomainError;
use eventdesk_core::event::{Event, EventPatch};
use eventdesk_core::id::EventId;
use eventdesk_core::repository::EventRepository;

/// A single call observed by `RecordingEventRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    /// `get(id)`
    Get(EventId),
    /// `get_all()`
    GetAll,
    /// `set(event)`
    Set(Event),
    /// `delete(id)`
    Delete(EventId),
    /// `update(id, patch)`
    Update(EventId, EventPatch),
}

/// An event repository that records every call. Lookups return `None` or an
/// empty list, and writes always succeed.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    calls: Mutex<Vec<RepositoryCall>>,
}

impl RecordingEventRepository {
    /// Create a new recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded calls, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn get(&self, id: EventId) -> Result<Option<Event>, DomainError> {
        self.record(RepositoryCall::Get(id));
        Ok(None)
    }

    async fn get_all(&self) -> Result<Vec<Event>, DomainError> {
        self.record(RepositoryCall::GetAll);
        Ok(vec![])
    }

    async fn set(&self, event: Event) -> Result<(), DomainError> {
        self.record(RepositoryCall::Set(event));
        Ok(())
    }

    async fn delete(&self, id: EventId) -> Result<(), DomainError> {
        self.record(RepositoryCall::Delete(id));
        Ok(())
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Option<Event>, DomainError> {
        self.record(RepositoryCall::Update(id, patch));
        Ok(None)
    }
}

/// An event repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventRepository;

fn unavailable() -> DomainError {
    DomainError::Infrastructure("storage unavailable".into())
}

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn get(&self, _id: EventId) -> Result<Option<Event>, DomainError> {
        Err(unavailable())
    }

    async fn get_all(&self) -> Result<Vec<Event>, DomainError> {
        Err(unavailable())
    }

    async fn set(&self, _event: Event) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: EventId) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _id: EventId, _patch: EventPatch) -> Result<Option<Event>, DomainError> {
        Err(unavailable())
    }
}
