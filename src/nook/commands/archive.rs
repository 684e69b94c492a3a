use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::{DocumentPatch, DocumentStore};
use tracing::debug;
use uuid::Uuid;

use super::helpers::{collect_descendants, fetch_owned};

/// Soft-delete a document and its whole subtree.
///
/// The target is patched first, then every transitive descendant in a
/// single batch, so the subtree is fully archived when this returns.
/// Descendants are collected through the caller's own (owner, parent)
/// index; a child another user hung under this document is untouched.
pub fn run<S: DocumentStore>(store: &mut S, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
    let doc = fetch_owned(&*store, ctx, id)?;
    let descendants = collect_descendants(&*store, &doc.owner_id, id)?;

    let patch = DocumentPatch {
        is_archived: Some(true),
        ..Default::default()
    };
    let updated = store.patch(id, &patch)?;
    let patched = store.patch_many(&descendants, &patch)?;
    debug!(target_id = %id, descendants = patched, "archived subtree");

    Ok(updated)
}
