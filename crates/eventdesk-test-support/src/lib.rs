//! Shared test mocks and utilities for the eventdesk service.

mod id;
mod repository;

pub use id::SequenceIdGenerator;
pub use repository::{FailingEventRepository, RecordingEventRepository, RepositoryCall};
