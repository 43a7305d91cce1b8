//! Core domain types for the catalog.

mod category;
mod entry;
mod tag;

pub use category::{Category, MAP_TABLE_SUFFIX, ParseCategoryError, TAG_TABLE_SUFFIX};
pub use entry::{DraftError, Entry, EntryDraft, EntryId};
pub use tag::{ParseTagNameError, TagId, TagName};
