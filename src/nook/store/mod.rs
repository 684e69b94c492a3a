//! # Storage Layer
//!
//! This module defines the storage abstraction for nook. The [`DocumentStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All documents in a single `documents.json` index (id → document)
//!   - Each mutation rewrites the whole index, which is what makes
//!     [`DocumentStore::patch_many`] atomic
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering Contract
//!
//! Every listing operation returns documents newest-first by `created_at`,
//! with `id` as the tie-break so the order is stable across loads.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── documents.json      # All documents, keyed by id
//! └── config.json         # CLI configuration
//! ```

use crate::error::Result;
use crate::model::{Document, NewDocument, UserId};
use chrono::Utc;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Partial update applied to a stored document.
///
/// Single-`Option` fields can only be set. The double-`Option` fields
/// distinguish "leave untouched" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub is_published: Option<bool>,
    pub is_archived: Option<bool>,
    pub parent_id: Option<Option<Uuid>>,
}

impl DocumentPatch {
    /// Merge this patch into a document and bump `updated_at`.
    pub fn apply_to(&self, doc: &mut Document) {
        if let Some(title) = &self.title {
            doc.title = title.clone();
        }
        if let Some(content) = &self.content {
            doc.content = Some(content.clone());
        }
        if let Some(cover_image) = &self.cover_image {
            doc.cover_image = cover_image.clone();
        }
        if let Some(icon) = &self.icon {
            doc.icon = icon.clone();
        }
        if let Some(is_published) = self.is_published {
            doc.is_published = is_published;
        }
        if let Some(is_archived) = self.is_archived {
            doc.is_archived = is_archived;
        }
        if let Some(parent_id) = self.parent_id {
            doc.parent_id = parent_id;
        }
        doc.updated_at = Utc::now();
    }
}

/// Abstract interface for document storage.
///
/// Implementations must provide point lookup, owner- and parent-indexed
/// listings, and single- and multi-row partial updates.
pub trait DocumentStore {
    /// Insert a new document, stamping id, timestamps, and default flags
    fn insert(&mut self, new: NewDocument) -> Result<Document>;

    /// Get a document by id
    fn get(&self, id: &Uuid) -> Result<Option<Document>>;

    /// Apply a partial update to one document
    fn patch(&mut self, id: &Uuid, patch: &DocumentPatch) -> Result<Document>;

    /// Apply the same partial update to many documents in one atomic batch.
    /// Ids missing from the store are skipped; returns the number patched.
    fn patch_many(&mut self, ids: &[Uuid], patch: &DocumentPatch) -> Result<usize>;

    /// Delete a document permanently and return it
    fn delete(&mut self, id: &Uuid) -> Result<Document>;

    /// All documents owned by a user, newest first
    fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Document>>;

    /// Documents owned by a user under a given parent (`None` = roots),
    /// newest first. No archived filter; callers post-filter.
    fn list_children(&self, owner: &UserId, parent: Option<&Uuid>) -> Result<Vec<Document>>;
}

pub(crate) fn sort_newest_first(docs: &mut [Document]) {
    docs.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
