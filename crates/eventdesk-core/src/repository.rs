//! Event repository abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::event::{Event, EventPatch};
use crate::id::EventId;

/// Repository trait owning the stored events.
///
/// Every call is atomic with respect to every other call on the same
/// repository. Absence is reported through `Option`, never as an error.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Load the event with the given id, if one exists.
    async fn get(&self, id: EventId) -> Result<Option<Event>, DomainError>;

    /// Load a snapshot of every stored event, in insertion order.
    async fn get_all(&self) -> Result<Vec<Event>, DomainError>;

    /// Insert `event`, replacing any stored event with the same id.
    async fn set(&self, event: Event) -> Result<(), DomainError>;

    /// Remove the event with the given id. Removing an absent id succeeds.
    async fn delete(&self, id: EventId) -> Result<(), DomainError>;

    /// Apply `patch` to the stored event with the given id and return the
    /// updated event, or `None` if no such event exists.
    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Option<Event>, DomainError>;
}
