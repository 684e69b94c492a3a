//! Clearing display metadata. Setting icon and cover image goes through
//! the generic update; clearing them is its own pair of operations because
//! the update patch cannot express "remove this field".

use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::{DocumentPatch, DocumentStore};
use uuid::Uuid;

use super::helpers::fetch_owned;

pub fn remove_icon<S: DocumentStore>(
    store: &mut S,
    ctx: &RequestContext,
    id: &Uuid,
) -> Result<Document> {
    fetch_owned(&*store, ctx, id)?;
    store.patch(
        id,
        &DocumentPatch {
            icon: Some(None),
            ..Default::default()
        },
    )
}

pub fn remove_cover_image<S: DocumentStore>(
    store: &mut S,
    ctx: &RequestContext,
    id: &Uuid,
) -> Result<Document> {
    fetch_owned(&*store, ctx, id)?;
    store.patch(
        id,
        &DocumentPatch {
            cover_image: Some(None),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, update};
    use crate::error::NookError;
    use crate::store::memory::InMemoryStore;

    fn decorated_doc(store: &mut InMemoryStore, ctx: &RequestContext) -> Document {
        let doc = create::run(store, ctx, "Styled".to_string(), None).unwrap();
        update::run(
            store,
            ctx,
            &doc.id,
            update::UpdateFields {
                icon: Some("📄".to_string()),
                cover_image: Some("cover.png".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn remove_icon_clears_only_icon() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let doc = decorated_doc(&mut store, &ctx);

        let updated = remove_icon(&mut store, &ctx, &doc.id).unwrap();

        assert!(updated.icon.is_none());
        assert_eq!(updated.cover_image.as_deref(), Some("cover.png"));
        assert_eq!(updated.title, "Styled");
    }

    #[test]
    fn remove_cover_clears_only_cover() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let doc = decorated_doc(&mut store, &ctx);

        let updated = remove_cover_image(&mut store, &ctx, &doc.id).unwrap();

        assert!(updated.cover_image.is_none());
        assert_eq!(updated.icon.as_deref(), Some("📄"));
    }

    #[test]
    fn non_owner_is_rejected() {
        let mut store = InMemoryStore::new();
        let ctx = RequestContext::authenticated("u1");
        let doc = decorated_doc(&mut store, &ctx);

        let err = remove_icon(&mut store, &RequestContext::authenticated("u2"), &doc.id)
            .unwrap_err();
        assert!(matches!(err, NookError::Unauthorized));
    }
}
