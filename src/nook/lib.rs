//! # Nook Architecture
//!
//! Nook is a **client-agnostic document workspace library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! That distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, resolves the caller identity,          │
//! │    formats output                                           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - One method per operation, carrying the RequestContext    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: access checks, tree cascades        │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Document Forest
//!
//! Documents form a forest per owner: each document either points at a parent
//! via `parent_id` or is a root. Archiving and restoring cascade through the
//! whole subtree; see `commands::archive` and `commands::restore` for how the
//! cascade is collected and applied as one batch.
//!
//! ## Identity
//!
//! Authentication happens outside this crate. Every operation receives a
//! request-scoped [`model::RequestContext`] carrying the identity an external
//! provider resolved (or none). There is no ambient current-user state.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Document>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a sync daemon, or any
//! other client.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the business
//!    logic over `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//!
//! 2. **API** (`api.rs`): workflow tests verifying correct dispatch and
//!    return types—not the logic itself.
//!
//! 3. **CLI** (`main.rs` + `tests/`): integration tests driving the real
//!    binary against an isolated data directory.
//!
//! ## Development Workflow
//!
//! When implementing features, work **inside-out**:
//!
//! 1. **Logic**: implement and fully test in `commands/<cmd>.rs`
//! 2. **API**: add the facade method in `api.rs`
//! 3. **CLI**: add the handler in `main.rs`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Document`, `UserId`, `RequestContext`)
//! - [`config`]: Configuration for the bundled CLI
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
