use crate::error::{NookError, Result};
use crate::model::{Document, RequestContext, UserId};
use crate::store::DocumentStore;
use std::collections::HashSet;
use uuid::Uuid;

/// Fetch a document the caller is allowed to mutate.
///
/// Check order: authentication, then existence, then ownership.
pub fn fetch_owned<S: DocumentStore>(
    store: &S,
    ctx: &RequestContext,
    id: &Uuid,
) -> Result<Document> {
    let caller = ctx.caller()?;
    let doc = store.get(id)?.ok_or(NookError::NotFound(*id))?;
    if &doc.owner_id != caller {
        return Err(NookError::Unauthorized);
    }
    Ok(doc)
}

/// Ids of all transitive descendants of `root`, via the (owner, parent)
/// index. The walk is iterative and keeps a visited set, so a corrupted
/// parent cycle terminates instead of recursing forever. `root` itself is
/// not included.
pub fn collect_descendants<S: DocumentStore>(
    store: &S,
    owner: &UserId,
    root: &Uuid,
) -> Result<Vec<Uuid>> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    seen.insert(*root);

    let mut stack = vec![*root];
    let mut descendants = Vec::new();

    while let Some(id) = stack.pop() {
        for child in store.list_children(owner, Some(&id))? {
            if seen.insert(child.id) {
                descendants.push(child.id);
                stack.push(child.id);
            }
        }
    }

    Ok(descendants)
}
