use crate::error::{NookError, Result};
use crate::model::{Document, NewDocument, RequestContext};
use crate::store::DocumentStore;
use uuid::Uuid;

/// Create a document owned by the caller, optionally under a parent.
///
/// The parent reference is taken on trust: it is not checked for existence
/// or ownership. A bad reference degrades to an unreachable row, which the
/// doctor pass reports.
pub fn run<S: DocumentStore>(
    store: &mut S,
    ctx: &RequestContext,
    title: String,
    parent_id: Option<Uuid>,
) -> Result<Document> {
    let caller = ctx.caller()?.clone();

    if title.trim().is_empty() {
        return Err(NookError::EmptyTitle);
    }

    store.insert(NewDocument {
        title,
        owner_id: caller,
        parent_id,
    })
}
