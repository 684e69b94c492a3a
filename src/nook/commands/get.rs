use crate::error::{NookError, Result};
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;
use uuid::Uuid;

/// Fetch one document with three-tier access:
///
/// 1. Missing id fails `NotFound`, before any identity check.
/// 2. A published, non-archived document is readable by anyone.
/// 3. Everything else requires the caller to be the owner.
pub fn run<S: DocumentStore>(store: &S, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
    let doc = store.get(id)?.ok_or(NookError::NotFound(*id))?;

    if doc.is_published && !doc.is_archived {
        return Ok(doc);
    }

    let caller = ctx.caller()?;
    if &doc.owner_id != caller {
        return Err(NookError::Unauthorized);
    }

    Ok(doc)
}
