//! Test id generator — deterministic `IdGenerator` implementation for tests.

use std::sync::Mutex;

use eventdesk_core::id::{EventId, IdGenerator};

/// An id generator that returns values from a predetermined sequence. Panics
/// if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    values: Mutex<std::vec::IntoIter<u64>>,
}

impl SequenceIdGenerator {
    /// Create a new `SequenceIdGenerator` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter()),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> EventId {
        let value = self
            .values
            .lock()
            .unwrap()
            .next()
            .expect("SequenceIdGenerator exhausted");
        EventId(value)
    }
}
