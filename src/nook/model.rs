//! # Domain Model
//!
//! This module defines the core data types: [`Document`], [`NewDocument`],
//! [`UserId`], and [`RequestContext`].
//!
//! ## The Document Forest
//!
//! Documents form a forest per owner: every document either points at a
//! parent document via `parent_id` or is a root. The reference is soft;
//! the store has no referential integrity, so a parent can be hard-deleted
//! out from under its children. Code that walks the tree must tolerate
//! dangling parents (see `commands::doctor` for the repair pass).
//!
//! ## Identity
//!
//! Authentication itself happens outside this crate. Callers arrive with a
//! [`RequestContext`] carrying the identity an external provider already
//! resolved (or none, for anonymous reads of published documents). The
//! context is request-scoped and passed explicitly to every operation;
//! there is no ambient current-user state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NookError, Result};

/// Opaque identifier of a user, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request caller identity. `None` means an anonymous request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    caller: Option<UserId>,
}

impl RequestContext {
    pub fn authenticated(user: impl Into<UserId>) -> Self {
        Self {
            caller: Some(user.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { caller: None }
    }

    /// The caller identity, or `Unauthenticated` if the request is anonymous.
    pub fn caller(&self) -> Result<&UserId> {
        self.caller.as_ref().ok_or(NookError::Unauthenticated)
    }

    pub fn caller_opt(&self) -> Option<&UserId> {
        self.caller.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub is_archived: bool,
    pub is_published: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a document. The store stamps id, timestamps, and
/// default flags.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub owner_id: UserId,
    pub parent_id: Option<Uuid>,
}

impl Document {
    pub fn new(new: NewDocument) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            owner_id: new.owner_id,
            parent_id: new.parent_id,
            is_archived: false,
            is_published: false,
            content: None,
            cover_image: None,
            icon: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
