use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;

/// All archived documents owned by the caller, newest first. Flat: the
/// hierarchy is not reconstructed, restore handles subtrees itself.
pub fn run<S: DocumentStore>(store: &S, ctx: &RequestContext) -> Result<Vec<Document>> {
    let caller = ctx.caller()?;
    let mut docs = store.list_by_owner(caller)?;
    docs.retain(|d| d.is_archived);
    Ok(docs)
}
