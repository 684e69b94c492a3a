//! Business logic, one module per operation.
//!
//! Every operation takes the store it acts on, the request-scoped
//! [`crate::model::RequestContext`], and plain arguments, and returns plain
//! domain types. No I/O assumptions; presentation belongs to the caller.
//!
//! The access checks run in a fixed order: authentication before existence,
//! existence before ownership. `get` is the one exception, where a published
//! non-archived document short-circuits all identity checks.

pub mod appearance;
pub mod archive;
pub mod create;
pub mod doctor;
pub mod get;
pub mod helpers;
pub mod remove;
pub mod restore;
pub mod search;
pub mod sidebar;
pub mod trash;
pub mod update;
