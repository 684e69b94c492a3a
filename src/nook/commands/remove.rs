use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;
use tracing::debug;
use uuid::Uuid;

use super::helpers::fetch_owned;

/// Permanently delete one document. Children are NOT cascaded: they keep
/// their now-dangling parent reference and drop out of every sidebar
/// listing. `doctor --fix` reparents them to root.
pub fn run<S: DocumentStore>(store: &mut S, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
    fetch_owned(&*store, ctx, id)?;
    let deleted = store.delete(id)?;
    debug!(target_id = %id, "deleted document");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, sidebar};
    use crate::error::NookError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_exactly_one_document() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let doc = create::run(&mut store, &ctx, "Doomed".to_string(), None).unwrap();

        let deleted = run(&mut store, &ctx, &doc.id).unwrap();

        assert_eq!(deleted.id, doc.id);
        assert!(store.get(&doc.id).unwrap().is_none());
    }

    #[test]
    fn children_survive_with_dangling_parent() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let parent = create::run(&mut store, &ctx, "Parent".to_string(), None).unwrap();
        let child = create::run(&mut store, &ctx, "Child".to_string(), Some(parent.id)).unwrap();

        run(&mut store, &ctx, &parent.id).unwrap();

        let orphan = store.get(&child.id).unwrap().unwrap();
        assert_eq!(orphan.parent_id, Some(parent.id));

        // Unreachable from the sidebar: not a root, and its parent is gone
        assert!(sidebar::run(&store, &ctx, None).unwrap().is_empty());
    }

    #[test]
    fn non_owner_cannot_remove() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let doc = create::run(&mut store, &ctx, "Doc".to_string(), None).unwrap();

        let err = run(&mut store, &RequestContext::authenticated("u2"), &doc.id).unwrap_err();
        assert!(matches!(err, NookError::Unauthorized));
        assert!(store.get(&doc.id).unwrap().is_some());
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let id = Uuid::new_v4();
        let err = run(&mut store, &ctx, &id).unwrap_err();
        assert!(matches!(err, NookError::NotFound(e) if e == id));
    }
}
