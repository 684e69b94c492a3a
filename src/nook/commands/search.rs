use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;

/// All live (non-archived) documents owned by the caller, newest first.
/// The scan is deliberately flat and unfiltered; text matching happens
/// client-side, see [`filter_ranked`].
pub fn run<S: DocumentStore>(store: &S, ctx: &RequestContext) -> Result<Vec<Document>> {
    let caller = ctx.caller()?;
    let mut docs = store.list_by_owner(caller)?;
    docs.retain(|d| !d.is_archived);
    Ok(docs)
}

/// Rank documents against a search term: exact title match first, then
/// title substring, then content substring. Ties break on shorter title,
/// then older document.
pub fn filter_ranked(docs: Vec<Document>, term: &str) -> Vec<Document> {
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(Document, u8)> = docs
        .into_iter()
        .filter_map(|doc| {
            let title_lower = doc.title.to_lowercase();
            let content_lower = doc
                .content
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default();

            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if content_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((doc, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| {
        score_a
            .cmp(score_b)
            .then_with(|| a.title.len().cmp(&b.title.len()))
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    matches.into_iter().map(|(doc, _)| doc).collect()
}
