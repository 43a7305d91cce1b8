//! Search filter and SQL predicate assembly.
//!
//! A [`Filter`] carries the raw search inputs: optional title and body
//! substrings plus selected tag names. [`Predicate`] is the composed WHERE
//! fragment with its bound parameters; tag names are resolved to
//! association-table probes ([`TagBranch`]) before composition, so the
//! predicate itself only ever sees text substrings and tag ids.

use crate::domain::{Category, TagId, TagName};
use rusqlite::types::Value;

// ===========================================
// Filter
// ===========================================

/// Raw search inputs for filtering entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    title: Option<String>,
    body: Option<String>,
    tags: Vec<TagName>,
}

impl Filter {
    /// Creates an empty filter that matches every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to entries whose title contains the substring
    /// (case-insensitive).
    pub fn title_contains(mut self, substring: impl Into<String>) -> Self {
        self.title = Some(substring.into());
        self
    }

    /// Restricts to entries whose body contains the substring
    /// (case-insensitive).
    pub fn body_contains(mut self, substring: impl Into<String>) -> Self {
        self.body = Some(substring.into());
        self
    }

    /// Adds a selected tag name. Names span categories: each is resolved
    /// against every category whose vocabulary lists it.
    pub fn with_tag(mut self, tag: TagName) -> Self {
        self.tags.push(tag);
        self
    }

    /// Returns the title substring, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the body substring, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the selected tag names.
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }

    /// Returns true when no inputs are set (match all).
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_empty()
    }
}

// ===========================================
// Predicate
// ===========================================

/// One resolved tag condition: the association table to probe and the tag id
/// to probe it with.
///
/// The table name derives from a validated [`Category`] identifier; the tag
/// id is bound as a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBranch {
    map_table: String,
    tag_id: TagId,
}

impl TagBranch {
    pub fn new(category: &Category, tag_id: TagId) -> Self {
        Self {
            map_table: category.map_table(),
            tag_id,
        }
    }
}

/// A composed filter predicate: a WHERE fragment plus bound parameters.
///
/// Construction guarantees the fragment is well-formed for every input
/// combination; in particular, selected tags resolving to no branches produce
/// a match-none condition rather than a dangling empty group.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    conditions: Vec<String>,
    params: Vec<Value>,
}

impl Predicate {
    /// A predicate that matches every entry.
    pub fn match_all() -> Self {
        Self {
            conditions: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Composes a predicate from text substrings and optional resolved tag
    /// branches.
    ///
    /// `tag_branches` is `None` when no tags were selected. `Some(empty)`
    /// means tags were selected but none resolved to a vocabulary tag, which
    /// must match no rows. Resolved branches become a `UNION` subquery over
    /// the association tables, binding one parameter per branch regardless of
    /// how many entries carry the tag.
    pub fn compose(
        title: Option<&str>,
        body: Option<&str>,
        tag_branches: Option<&[TagBranch]>,
    ) -> Self {
        let mut conditions = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(substring) = title {
            conditions.push(r"title LIKE ? ESCAPE '\'".to_string());
            params.push(Value::Text(like_pattern(substring)));
        }

        if let Some(substring) = body {
            conditions.push(r"body LIKE ? ESCAPE '\'".to_string());
            params.push(Value::Text(like_pattern(substring)));
        }

        match tag_branches {
            None => {}
            Some(branches) if branches.is_empty() => {
                conditions.push("0 = 1".to_string());
            }
            Some(branches) => {
                let subquery = branches
                    .iter()
                    .map(|b| format!("SELECT entry_id FROM {} WHERE tag_id = ?", b.map_table))
                    .collect::<Vec<_>>()
                    .join(" UNION ");
                conditions.push(format!("id IN ({})", subquery));
                params.extend(branches.iter().map(|b| Value::Integer(b.tag_id.value())));
            }
        }

        Self { conditions, params }
    }

    /// Returns true when the predicate matches every entry.
    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns the WHERE clause including the leading keyword, or an empty
    /// string for a match-all predicate.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Returns the bound parameters, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Wraps a substring in `%` wildcards, escaping LIKE metacharacters in the
/// user's input so they match literally.
fn like_pattern(substring: &str) -> String {
    let mut escaped = String::with_capacity(substring.len() + 2);
    escaped.push('%');
    for c in substring.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn branch(category: &str, tag_id: i64) -> TagBranch {
        TagBranch::new(&Category::new(category).unwrap(), TagId::new(tag_id))
    }

    // ===========================================
    // Filter
    // ===========================================

    #[test]
    fn empty_filter_matches_all() {
        assert!(Filter::new().is_empty());
    }

    #[test]
    fn filter_with_any_input_is_not_empty() {
        assert!(!Filter::new().title_contains("x").is_empty());
        assert!(!Filter::new().body_contains("x").is_empty());
        assert!(!Filter::new().with_tag(TagName::new("t").unwrap()).is_empty());
    }

    #[test]
    fn filter_accumulates_tags() {
        let filter = Filter::new()
            .with_tag(TagName::new("fantasy").unwrap())
            .with_tag(TagName::new("sci-fi").unwrap());
        assert_eq!(filter.tags().len(), 2);
    }

    // ===========================================
    // Predicate Composition
    // ===========================================

    #[test]
    fn match_all_has_empty_clause() {
        let p = Predicate::match_all();
        assert!(p.is_match_all());
        assert_eq!(p.where_clause(), "");
        assert!(p.params().is_empty());
    }

    #[test]
    fn no_inputs_composes_match_all() {
        let p = Predicate::compose(None, None, None);
        assert!(p.is_match_all());
    }

    #[test]
    fn title_only() {
        let p = Predicate::compose(Some("dragon"), None, None);
        assert_eq!(p.where_clause(), r" WHERE title LIKE ? ESCAPE '\'");
        assert_eq!(p.params(), &[Value::Text("%dragon%".to_string())]);
    }

    #[test]
    fn body_only() {
        let p = Predicate::compose(None, Some("winter"), None);
        assert_eq!(p.where_clause(), r" WHERE body LIKE ? ESCAPE '\'");
    }

    #[test]
    fn title_and_body_are_anded() {
        let p = Predicate::compose(Some("a"), Some("b"), None);
        assert_eq!(
            p.where_clause(),
            r" WHERE title LIKE ? ESCAPE '\' AND body LIKE ? ESCAPE '\'"
        );
        assert_eq!(p.params().len(), 2);
    }

    #[test]
    fn single_branch_probes_one_association_table() {
        let branches = [branch("Genre", 4)];
        let p = Predicate::compose(None, None, Some(&branches));
        assert_eq!(
            p.where_clause(),
            " WHERE id IN (SELECT entry_id FROM Genre_entry_tags WHERE tag_id = ?)"
        );
        assert_eq!(p.params(), &[Value::Integer(4)]);
    }

    #[test]
    fn branches_union_across_association_tables() {
        let branches = [branch("Author", 2), branch("Genre", 9)];
        let p = Predicate::compose(None, None, Some(&branches));
        assert_eq!(
            p.where_clause(),
            " WHERE id IN (SELECT entry_id FROM Author_entry_tags WHERE tag_id = ? \
             UNION SELECT entry_id FROM Genre_entry_tags WHERE tag_id = ?)"
        );
        assert_eq!(p.params(), &[Value::Integer(2), Value::Integer(9)]);
    }

    #[test]
    fn branch_binds_one_parameter_each() {
        // Parameter count follows the branch list, never the entries the
        // tags are applied to, keeping statements under the host-parameter
        // limit for arbitrarily popular tags.
        let branches: Vec<TagBranch> = (1..=5).map(|id| branch("Genre", id)).collect();
        let p = Predicate::compose(None, None, Some(&branches));
        assert_eq!(p.params().len(), 5);
    }

    #[test]
    fn text_and_branches_are_anded() {
        let branches = [branch("Genre", 7)];
        let p = Predicate::compose(Some("a"), None, Some(&branches));
        assert_eq!(
            p.where_clause(),
            r" WHERE title LIKE ? ESCAPE '\' AND id IN (SELECT entry_id FROM Genre_entry_tags WHERE tag_id = ?)"
        );
        assert_eq!(p.params().len(), 2);
    }

    #[test]
    fn no_resolved_branches_matches_none() {
        let p = Predicate::compose(None, None, Some(&[]));
        assert_eq!(p.where_clause(), " WHERE 0 = 1");
        assert!(p.params().is_empty());
    }

    #[test]
    fn no_resolved_branches_with_text_still_matches_none() {
        let p = Predicate::compose(Some("a"), None, Some(&[]));
        assert_eq!(
            p.where_clause(),
            r" WHERE title LIKE ? ESCAPE '\' AND 0 = 1"
        );
    }

    // ===========================================
    // LIKE Escaping
    // ===========================================

    #[test]
    fn like_pattern_wraps_in_wildcards() {
        assert_eq!(like_pattern("abc"), "%abc%");
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%"), r"%50\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
