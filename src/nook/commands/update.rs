use crate::error::{NookError, Result};
use crate::model::{Document, RequestContext};
use crate::store::{DocumentPatch, DocumentStore};
use uuid::Uuid;

use super::helpers::fetch_owned;

/// Fields updatable through the generic update operation. Present fields
/// overwrite; absent fields are untouched. Owner and parent are not
/// updatable here, and clearing icon or cover image goes through the
/// dedicated operations in [`super::appearance`].
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub icon: Option<String>,
    pub is_published: Option<bool>,
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    ctx: &RequestContext,
    id: &Uuid,
    fields: UpdateFields,
) -> Result<Document> {
    fetch_owned(&*store, ctx, id)?;

    if let Some(title) = &fields.title {
        if title.trim().is_empty() {
            return Err(NookError::EmptyTitle);
        }
    }

    let patch = DocumentPatch {
        title: fields.title,
        content: fields.content,
        cover_image: fields.cover_image.map(Some),
        icon: fields.icon.map(Some),
        is_published: fields.is_published,
        ..Default::default()
    };
    store.patch(id, &patch)
}
