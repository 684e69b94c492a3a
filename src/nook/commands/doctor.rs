use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::{DocumentPatch, DocumentStore};
use tracing::info;

/// Report from the `doctor` operation.
#[derive(Debug, Default)]
pub struct OrphanReport {
    /// Orphans as they looked before any repair
    pub orphans: Vec<Document>,
    pub fixed: usize,
}

/// Scan the caller's documents for dangling parent references, the
/// fallout hard delete deliberately leaves behind. With `fix`, orphans are
/// reparented to root in one batch. A parent that exists but belongs to
/// another user is not an orphan; the row is intact, just unreachable
/// through that parent's sidebar.
pub fn run<S: DocumentStore>(
    store: &mut S,
    ctx: &RequestContext,
    fix: bool,
) -> Result<OrphanReport> {
    let caller = ctx.caller()?.clone();

    let mut report = OrphanReport::default();
    for doc in store.list_by_owner(&caller)? {
        if let Some(parent_id) = doc.parent_id {
            if store.get(&parent_id)?.is_none() {
                report.orphans.push(doc);
            }
        }
    }

    if fix && !report.orphans.is_empty() {
        let ids: Vec<_> = report.orphans.iter().map(|d| d.id).collect();
        report.fixed = store.patch_many(
            &ids,
            &DocumentPatch {
                parent_id: Some(None),
                ..Default::default()
            },
        )?;
        info!(fixed = report.fixed, "reparented orphans to root");
    }

    Ok(report)
}
