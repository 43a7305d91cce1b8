//! CatalogRepository trait implementation for SqliteCatalog.
//!
//! Per-category statements interpolate only the table names derived from
//! validated [`Category`] identifiers; every user-supplied value is bound as
//! a parameter.

use super::SqliteCatalog;
use crate::domain::{Category, Entry, EntryDraft, EntryId, TagId, TagName};
use crate::store::{
    CatalogRepository, EntryField, FieldValue, Filter, Predicate, StoreError, StoreResult,
    TagBranch, TagSelector,
};
use rusqlite::params_from_iter;
use rusqlite::types::Value;
use std::collections::{BTreeMap, HashSet};

impl SqliteCatalog {
    /// Rejects categories that are not part of the loaded vocabulary.
    fn require_category(&self, category: &Category) -> StoreResult<()> {
        if self.vocabulary.contains(category) {
            Ok(())
        } else {
            Err(StoreError::Validation(format!(
                "unknown category '{}'",
                category
            )))
        }
    }

    /// Looks up a tag id by name without creating it.
    fn resolve_tag(&self, category: &Category, name: &TagName) -> StoreResult<Option<TagId>> {
        let sql = format!("SELECT id FROM {} WHERE name = ?", category.tag_table());
        match self.conn.query_row(&sql, [name.as_str()], |row| {
            row.get::<_, i64>(0)
        }) {
            Ok(id) => Ok(Some(TagId::new(id))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    /// Resolves a filter into a predicate, turning selected tag names into
    /// association-table probes.
    ///
    /// Each tag name is looked up in every category whose vocabulary lists
    /// it; the resolved probes are unioned in a subquery. Selected names that
    /// resolve to no vocabulary tag contribute no branch, and an empty branch
    /// list composes to a match-none predicate.
    pub fn predicate_for(&self, filter: &Filter) -> StoreResult<Predicate> {
        let branches = if filter.tags().is_empty() {
            None
        } else {
            let mut branches = Vec::new();
            for name in filter.tags() {
                for category in self.vocabulary.categories_with_tag(name) {
                    if let Some(id) = self.resolve_tag(category, name)? {
                        branches.push(TagBranch::new(category, id));
                    }
                }
            }
            Some(branches)
        };

        Ok(Predicate::compose(
            filter.title(),
            filter.body(),
            branches.as_deref(),
        ))
    }
}

impl CatalogRepository for SqliteCatalog {
    fn create_entry(&mut self, draft: &EntryDraft) -> StoreResult<EntryId> {
        self.conn.execute(
            "INSERT INTO entries (title, body) VALUES (?1, ?2)",
            [draft.title(), draft.body()],
        )?;
        Ok(EntryId::new(self.conn.last_insert_rowid()))
    }

    fn find_by_title(&self, title: &str) -> StoreResult<Option<Entry>> {
        let result = self.conn.query_row(
            "SELECT id, title, body FROM entries WHERE title = ? ORDER BY id LIMIT 1",
            [title],
            |row| {
                Ok(Entry::new(
                    EntryId::new(row.get::<_, i64>(0)?),
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        );

        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    fn resolve_or_create_tag(
        &mut self,
        category: &Category,
        name: &TagName,
    ) -> StoreResult<TagId> {
        self.require_category(category)?;

        if let Some(id) = self.resolve_tag(category, name)? {
            return Ok(id);
        }

        let sql = format!("INSERT INTO {} (name) VALUES (?)", category.tag_table());
        self.conn.execute(&sql, [name.as_str()])?;
        Ok(TagId::new(self.conn.last_insert_rowid()))
    }

    fn associate(&mut self, entry: EntryId, category: &Category, tag: TagId) -> StoreResult<()> {
        self.require_category(category)?;

        // OR IGNORE against the composite primary key keeps this idempotent;
        // foreign keys reject associations to missing entries or tags.
        let sql = format!(
            "INSERT OR IGNORE INTO {} (entry_id, tag_id) VALUES (?1, ?2)",
            category.map_table()
        );
        self.conn.execute(&sql, [entry.value(), tag.value()])?;
        Ok(())
    }

    fn entries_for_tag(
        &self,
        category: &Category,
        tag: TagSelector,
    ) -> StoreResult<HashSet<EntryId>> {
        self.require_category(category)?;

        let tag_id = match tag {
            TagSelector::Id(id) => id,
            TagSelector::Name(name) => match self.resolve_tag(category, &name)? {
                Some(id) => id,
                None => return Ok(HashSet::new()),
            },
        };

        let sql = format!(
            "SELECT entry_id FROM {} WHERE tag_id = ?",
            category.map_table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let ids = stmt
            .query_map([tag_id.value()], |row| row.get::<_, i64>(0))?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(EntryId::new)
            .collect();

        Ok(ids)
    }

    fn apply_tags(
        &mut self,
        entry: EntryId,
        tags: &BTreeMap<Category, Vec<TagName>>,
    ) -> StoreResult<()> {
        for (category, names) in tags {
            for name in names {
                let tag_id = self.resolve_or_create_tag(category, name)?;
                self.associate(entry, category, tag_id)?;
            }
        }
        Ok(())
    }

    fn count_entries(&self, filter: &Filter) -> StoreResult<u64> {
        let predicate = self.predicate_for(filter)?;
        let sql = format!("SELECT COUNT(*) FROM entries{}", predicate.where_clause());
        let count: i64 = self.conn.query_row(
            &sql,
            params_from_iter(predicate.params().iter()),
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn fetch_field(
        &self,
        field: EntryField,
        row: u64,
        filter: &Filter,
    ) -> StoreResult<Option<FieldValue>> {
        let predicate = self.predicate_for(filter)?;

        // ORDER BY id pins a stable row order, so a positional index names
        // the same row across successive calls under the same filter.
        let sql = format!(
            "SELECT {} FROM entries{} ORDER BY id LIMIT 1 OFFSET ?",
            field.column(),
            predicate.where_clause()
        );

        let mut params: Vec<Value> = predicate.params().to_vec();
        params.push(Value::Integer(row as i64));

        let result = self.conn.query_row(&sql, params_from_iter(params), |r| {
            match field {
                EntryField::Id => Ok(FieldValue::Id(EntryId::new(r.get::<_, i64>(0)?))),
                EntryField::Title | EntryField::Body => {
                    Ok(FieldValue::Text(r.get::<_, String>(0)?))
                }
            }
        });

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    fn list_entries(&self, filter: &Filter) -> StoreResult<Vec<Entry>> {
        let predicate = self.predicate_for(filter)?;
        let sql = format!(
            "SELECT id, title, body FROM entries{} ORDER BY id",
            predicate.where_clause()
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map(params_from_iter(predicate.params().iter()), |row| {
                Ok(Entry::new(
                    EntryId::new(row.get::<_, i64>(0)?),
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
