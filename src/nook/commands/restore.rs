use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::{DocumentPatch, DocumentStore};
use tracing::debug;
use uuid::Uuid;

use super::helpers::{collect_descendants, fetch_owned};

/// Un-archive a document and its whole subtree.
///
/// If the target's parent is itself still archived, the target is promoted
/// to root instead of reappearing under a hidden parent. A parent that no
/// longer exists is left referenced as-is (the doctor pass reports it).
/// Descendants only get the archived flag cleared; they keep their parents.
pub fn run<S: DocumentStore>(store: &mut S, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
    let doc = fetch_owned(&*store, ctx, id)?;

    let mut patch = DocumentPatch {
        is_archived: Some(false),
        ..Default::default()
    };
    if let Some(parent_id) = doc.parent_id {
        if let Some(parent) = store.get(&parent_id)? {
            if parent.is_archived {
                patch.parent_id = Some(None);
            }
        }
    }

    let descendants = collect_descendants(&*store, &doc.owner_id, id)?;
    let updated = store.patch(id, &patch)?;
    let patched = store.patch_many(
        &descendants,
        &DocumentPatch {
            is_archived: Some(false),
            ..Default::default()
        },
    )?;
    debug!(target_id = %id, descendants = patched, "restored subtree");

    Ok(updated)
}
