//! The event record and its partial-update form.

use serde::{Deserialize, Serialize};

use crate::id::EventId;

/// A stored event.
///
/// Field names on the wire are `ID`, `Title` and `Description`. Every field
/// is optional on input and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Identifier assigned by the id generator.
    #[serde(rename = "ID")]
    pub id: EventId,
    /// Short title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Free-form description.
    #[serde(rename = "Description")]
    pub description: String,
}

impl Event {
    /// Creates an event with the given identifier and fields.
    #[must_use]
    pub fn new(id: EventId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Replaces the fields present in `patch`, leaving the id untouched.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Partial update of an event. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EventPatch {
    /// Replacement title.
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl EventPatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
