use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;
use uuid::Uuid;

/// One level of the caller's tree: non-archived documents directly under
/// `parent` (`None` = roots), newest first. Clients expand nodes lazily by
/// calling again with the node's id.
pub fn run<S: DocumentStore>(
    store: &S,
    ctx: &RequestContext,
    parent: Option<&Uuid>,
) -> Result<Vec<Document>> {
    let caller = ctx.caller()?;
    let mut docs = store.list_children(caller, parent)?;
    docs.retain(|d| !d.is_archived);
    Ok(docs)
}
