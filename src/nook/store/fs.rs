use super::{sort_newest_first, DocumentPatch, DocumentStore};
use crate::error::{NookError, Result};
use crate::model::{Document, NewDocument, UserId};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const DATA_FILENAME: &str = "documents.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NookError::Io)?;
        }
        Ok(())
    }

    fn load_documents(&self) -> Result<HashMap<Uuid, Document>> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(NookError::Io)?;
        let docs: HashMap<Uuid, Document> =
            serde_json::from_str(&content).map_err(NookError::Serialization)?;
        debug!(count = docs.len(), "loaded document index");
        Ok(docs)
    }

    fn save_documents(&self, docs: &HashMap<Uuid, Document>) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.root.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(docs).map_err(NookError::Serialization)?;
        fs::write(data_file, content).map_err(NookError::Io)?;
        debug!(count = docs.len(), "saved document index");
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn insert(&mut self, new: NewDocument) -> Result<Document> {
        let mut docs = self.load_documents()?;
        let doc = Document::new(new);
        docs.insert(doc.id, doc.clone());
        self.save_documents(&docs)?;
        Ok(doc)
    }

    fn get(&self, id: &Uuid) -> Result<Option<Document>> {
        let docs = self.load_documents()?;
        Ok(docs.get(id).cloned())
    }

    fn patch(&mut self, id: &Uuid, patch: &DocumentPatch) -> Result<Document> {
        let mut docs = self.load_documents()?;
        let doc = docs.get_mut(id).ok_or(NookError::NotFound(*id))?;
        patch.apply_to(doc);
        let updated = doc.clone();
        self.save_documents(&docs)?;
        Ok(updated)
    }

    fn patch_many(&mut self, ids: &[Uuid], patch: &DocumentPatch) -> Result<usize> {
        let mut docs = self.load_documents()?;
        let mut patched = 0;
        for id in ids {
            if let Some(doc) = docs.get_mut(id) {
                patch.apply_to(doc);
                patched += 1;
            }
        }
        // One write for the whole batch
        self.save_documents(&docs)?;
        Ok(patched)
    }

    fn delete(&mut self, id: &Uuid) -> Result<Document> {
        let mut docs = self.load_documents()?;
        let doc = docs.remove(id).ok_or(NookError::NotFound(*id))?;
        self.save_documents(&docs)?;
        Ok(doc)
    }

    fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Document>> {
        let docs = self.load_documents()?;
        let mut owned: Vec<Document> = docs
            .into_values()
            .filter(|d| &d.owner_id == owner)
            .collect();
        sort_newest_first(&mut owned);
        Ok(owned)
    }

    fn list_children(&self, owner: &UserId, parent: Option<&Uuid>) -> Result<Vec<Document>> {
        let docs = self.load_documents()?;
        let mut children: Vec<Document> = docs
            .into_values()
            .filter(|d| &d.owner_id == owner && d.parent_id.as_ref() == parent)
            .collect();
        sort_newest_first(&mut children);
        Ok(children)
    }
}
