use super::{sort_newest_first, DocumentPatch, DocumentStore};
use crate::error::{NookError, Result};
use crate::model::{Document, NewDocument, UserId};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory twin of the file store, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<Uuid, Document>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl InMemoryStore {
    /// Insert a fully formed document, bypassing the stamping in `insert`.
    pub fn seed(&mut self, doc: Document) {
        self.documents.insert(doc.id, doc);
    }
}

impl DocumentStore for InMemoryStore {
    fn insert(&mut self, new: NewDocument) -> Result<Document> {
        let doc = Document::new(new);
        self.documents.insert(doc.id, doc.clone());
        Ok(doc)
    }

    fn get(&self, id: &Uuid) -> Result<Option<Document>> {
        Ok(self.documents.get(id).cloned())
    }

    fn patch(&mut self, id: &Uuid, patch: &DocumentPatch) -> Result<Document> {
        let doc = self.documents.get_mut(id).ok_or(NookError::NotFound(*id))?;
        patch.apply_to(doc);
        Ok(doc.clone())
    }

    fn patch_many(&mut self, ids: &[Uuid], patch: &DocumentPatch) -> Result<usize> {
        let mut patched = 0;
        for id in ids {
            if let Some(doc) = self.documents.get_mut(id) {
                patch.apply_to(doc);
                patched += 1;
            }
        }
        Ok(patched)
    }

    fn delete(&mut self, id: &Uuid) -> Result<Document> {
        self.documents.remove(id).ok_or(NookError::NotFound(*id))
    }

    fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Document>> {
        let mut owned: Vec<Document> = self
            .documents
            .values()
            .filter(|d| &d.owner_id == owner)
            .cloned()
            .collect();
        sort_newest_first(&mut owned);
        Ok(owned)
    }

    fn list_children(&self, owner: &UserId, parent: Option<&Uuid>) -> Result<Vec<Document>> {
        let mut children: Vec<Document> = self
            .documents
            .values()
            .filter(|d| &d.owner_id == owner && d.parent_id.as_ref() == parent)
            .cloned()
            .collect();
        sort_newest_first(&mut children);
        Ok(children)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_document(mut self, owner: &str, title: &str) -> Self {
            self.store
                .insert(NewDocument {
                    title: title.to_string(),
                    owner_id: UserId::from(owner),
                    parent_id: None,
                })
                .unwrap();
            self
        }

        pub fn with_archived_document(mut self, owner: &str, title: &str) -> Self {
            let mut doc = Document::new(NewDocument {
                title: title.to_string(),
                owner_id: UserId::from(owner),
                parent_id: None,
            });
            doc.is_archived = true;
            self.store.seed(doc);
            self
        }

        pub fn with_published_document(mut self, owner: &str, title: &str) -> Self {
            let mut doc = Document::new(NewDocument {
                title: title.to_string(),
                owner_id: UserId::from(owner),
                parent_id: None,
            });
            doc.is_published = true;
            self.store.seed(doc);
            self
        }
    }
}
