//! Event identifiers and the generator that hands them out.

use std::fmt;
use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a stored event.
///
/// Serialized as a bare JSON integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a path segment is not a valid event identifier.
#[derive(Debug, Error)]
#[error("invalid event id {input:?}: {source}")]
pub struct ParseEventIdError {
    /// The rejected input.
    pub input: String,
    /// Why the input was rejected.
    #[source]
    pub source: ParseIntError,
}

impl FromStr for EventId {
    type Err = ParseEventIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self).map_err(|source| ParseEventIdError {
            input: s.to_owned(),
            source,
        })
    }
}

/// Source of unique event identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier strictly greater than every identifier this
    /// generator has returned before.
    fn next_id(&self) -> EventId;
}

/// Production generator backed by an atomic counter.
#[derive(Debug)]
pub struct AtomicIdGenerator {
    next: AtomicU64,
}

impl AtomicIdGenerator {
    /// Creates a generator whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(NonZeroU64::MIN)
    }

    /// Creates a generator whose first identifier is `first`.
    #[must_use]
    pub fn starting_at(first: NonZeroU64) -> Self {
        Self {
            next: AtomicU64::new(first.get()),
        }
    }
}

impl Default for AtomicIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for AtomicIdGenerator {
    fn next_id(&self) -> EventId {
        EventId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
