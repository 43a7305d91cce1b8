//! Entry records and validated drafts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entry's row identifier, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(i64);

impl EntryId {
    /// Wraps a raw row id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored entry: a title and free-text body with its assigned id.
///
/// Entries are created once and never updated or deleted; titles are not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    id: EntryId,
    title: String,
    body: String,
}

impl Entry {
    /// Creates an Entry from stored values.
    pub fn new(id: EntryId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the entry's identifier.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the entry's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entry's body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A validated, not-yet-stored entry.
///
/// Construction enforces the caller-level input check: both title and body
/// must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    title: String,
    body: String,
}

/// Error returned when a draft's title or body is missing.
#[derive(Debug, Clone)]
pub struct DraftError(String);

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DraftError {}

impl EntryDraft {
    /// Creates a draft, trimming surrounding whitespace from both fields.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` if the title or body is empty or whitespace-only.
    pub fn new(title: &str, body: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let body = body.trim();

        if title.is_empty() {
            return Err(DraftError("entry title cannot be empty".to_string()));
        }
        if body.is_empty() {
            return Err(DraftError("entry body cannot be empty".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    /// Returns the draft's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft's body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}
