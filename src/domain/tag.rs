//! Tag identifiers and display names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tag's row identifier, unique within its category.
///
/// Two tags in different categories may share an id (and a name); a `TagId`
/// is only meaningful alongside the `Category` it was resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagId(i64);

impl TagId {
    /// Wraps a raw row id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tag's display name.
///
/// Unlike category names, tag names are ordinary user text ("Ursula K. Le
/// Guin", "sci-fi"): inner whitespace and punctuation are allowed and case is
/// preserved. The only requirements are that the name is non-empty after
/// trimming and contains no control characters. Names are always bound as SQL
/// parameters, never spliced into statements.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

/// Error returned when parsing an invalid tag name.
#[derive(Debug, Clone)]
pub struct ParseTagNameError(String);

impl fmt::Display for ParseTagNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagNameError {}

impl TagName {
    /// Creates a new TagName, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagNameError` if the name is empty after trimming or
    /// contains control characters.
    pub fn new(s: &str) -> Result<Self, ParseTagNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagNameError("tag name cannot be empty".to_string()));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ParseTagNameError(format!(
                "invalid tag name '{}': control characters are not allowed",
                trimmed.escape_default()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagName(\"{}\")", self.0)
    }
}

impl FromStr for TagName {
    type Err = ParseTagNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TagName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    // ===========================================
    // TagName Validation
    // ===========================================

    #[test]
    fn new_with_valid_name() {
        let name = TagName::new("sci-fi").unwrap();
        assert_eq!(name.as_str(), "sci-fi");
    }

    #[test]
    fn new_allows_inner_whitespace_and_punctuation() {
        let name = TagName::new("Ursula K. Le Guin").unwrap();
        assert_eq!(name.as_str(), "Ursula K. Le Guin");
    }

    #[test]
    fn new_preserves_case() {
        let name = TagName::new("Fantasy").unwrap();
        assert_eq!(name.as_str(), "Fantasy");
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let name = TagName::new("  horror  ").unwrap();
        assert_eq!(name.as_str(), "horror");
    }

    #[test]
    fn new_rejects_empty() {
        assert!(TagName::new("").is_err());
        assert!(TagName::new("   ").is_err());
    }

    #[test]
    fn new_rejects_control_characters() {
        assert!(TagName::new("bad\ttag").is_err());
        assert!(TagName::new("bad\ntag").is_err());
    }

    #[test]
    fn equality_is_case_sensitive() {
        let a = TagName::new("Fantasy").unwrap();
        let b = TagName::new("fantasy").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hashset_keeps_distinct_names() {
        let mut set = HashSet::new();
        set.insert(TagName::new("horror").unwrap());
        set.insert(TagName::new("horror").unwrap());
        set.insert(TagName::new("Horror").unwrap());
        assert_eq!(set.len(), 2);
    }

    // ===========================================
    // TagId
    // ===========================================

    #[test]
    fn tag_id_roundtrips_value() {
        let id = TagId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn tag_id_display() {
        assert_eq!(TagId::new(7).to_string(), "7");
    }

    // ===========================================
    // Display, Debug, FromStr, Serde
    // ===========================================

    #[test]
    fn display_shows_name() {
        let name = TagName::new("horror").unwrap();
        assert_eq!(format!("{}", name), "horror");
    }

    #[test]
    fn debug_format() {
        let name = TagName::new("horror").unwrap();
        assert_eq!(format!("{:?}", name), "TagName(\"horror\")");
    }

    #[test]
    fn parse_via_fromstr() {
        let name: TagName = "horror".parse().unwrap();
        assert_eq!(name.as_str(), "horror");
    }

    #[test]
    fn serde_roundtrip() {
        let name = TagName::new("Le Guin").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let parsed: TagName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn serde_rejects_empty_on_deserialize() {
        let result: Result<TagName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
