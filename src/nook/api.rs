//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all nook operations, regardless of the client being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries the request context** (caller identity) into every call
//! - **Returns structured types** (`Result<Document>` and friends)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Access decisions**: the commands enforce the auth contract
//! - **I/O or presentation**: no stdout, stderr, or string formatting
//!
//! ## Generic Over DocumentStore
//!
//! `NookApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `NookApi<FileStore>`
//! - Testing: `NookApi<InMemoryStore>`
//!
//! Queries borrow `&self`, mutations `&mut self`; the borrow checker is the
//! only cross-request locking this crate provides.

use crate::commands;
use crate::error::Result;
use crate::model::{Document, RequestContext};
use crate::store::DocumentStore;
use uuid::Uuid;

/// The main API facade for nook operations.
///
/// Generic over `DocumentStore` to allow different storage backends.
/// All clients (the bundled CLI, or any remote transport) should interact
/// through this API.
pub struct NookApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> NookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a document owned by the caller, optionally under a parent.
    pub fn create(
        &mut self,
        ctx: &RequestContext,
        title: String,
        parent_id: Option<Uuid>,
    ) -> Result<Document> {
        commands::create::run(&mut self.store, ctx, title, parent_id)
    }

    /// One level of the caller's tree: non-archived documents directly
    /// under `parent` (`None` = roots), newest first.
    pub fn sidebar(&self, ctx: &RequestContext, parent: Option<&Uuid>) -> Result<Vec<Document>> {
        commands::sidebar::run(&self.store, ctx, parent)
    }

    /// Fetch one document; published non-archived documents are public.
    pub fn get_by_id(&self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::get::run(&self.store, ctx, id)
    }

    /// Partial update; absent fields are left untouched.
    pub fn update(
        &mut self,
        ctx: &RequestContext,
        id: &Uuid,
        fields: UpdateFields,
    ) -> Result<Document> {
        commands::update::run(&mut self.store, ctx, id, fields)
    }

    pub fn remove_icon(&mut self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::appearance::remove_icon(&mut self.store, ctx, id)
    }

    pub fn remove_cover_image(&mut self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::appearance::remove_cover_image(&mut self.store, ctx, id)
    }

    /// Archive a document and its whole subtree.
    pub fn archive(&mut self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::archive::run(&mut self.store, ctx, id)
    }

    /// Un-archive a document and its whole subtree.
    pub fn restore(&mut self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::restore::run(&mut self.store, ctx, id)
    }

    /// Permanently delete one document; children are not cascaded.
    pub fn remove(&mut self, ctx: &RequestContext, id: &Uuid) -> Result<Document> {
        commands::remove::run(&mut self.store, ctx, id)
    }

    /// All archived documents owned by the caller, newest first.
    pub fn trash(&self, ctx: &RequestContext) -> Result<Vec<Document>> {
        commands::trash::run(&self.store, ctx)
    }

    /// All live documents owned by the caller, newest first.
    pub fn search(&self, ctx: &RequestContext) -> Result<Vec<Document>> {
        commands::search::run(&self.store, ctx)
    }

    /// Report (and with `fix`, repair) dangling parent references.
    pub fn doctor(&mut self, ctx: &RequestContext, fix: bool) -> Result<OrphanReport> {
        commands::doctor::run(&mut self.store, ctx, fix)
    }
}

pub use crate::commands::doctor::OrphanReport;
pub use crate::commands::search::filter_ranked;
pub use crate::commands::update::UpdateFields;
