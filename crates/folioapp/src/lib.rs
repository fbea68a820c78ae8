//! # Folio Architecture
//!
//! Folio is the editing core of a single-page portfolio site whose content is
//! one JSON document. It is a library first; the `folio` binary is one client
//! of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (folio crate)                                          │
//! │  - Parses arguments, prints messages, sets the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session gate, selector parsing, dispatch                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns requests into editor operations and messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Workflow (workflow.rs)                                     │
//! │  - Clean / Dirty / Saving / SaveFailed, notices             │
//! │  - Document store + differ, persistence gateway             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ContentBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Editing Model
//!
//! The working copy changes only by whole-document replacement: every editor
//! operation in [`collection`] takes the current document and returns a new
//! one. The baseline is the last persisted document; "dirty" means the two
//! differ. Saving goes through the [`gateway`], which only writes in the
//! development environment.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Results come back as [`commands::CmdResult`] with leveled
//! messages, and the UI decides how to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per user-facing operation
//! - [`workflow`]: the editor state machine and notices
//! - [`collection`]: pure document editors and their `Outcome`
//! - [`diff`]: dirty detection and changed sections
//! - [`store`]: document store and content backends
//! - [`gateway`]: environment-gated persistence
//! - [`session`]: the shared-secret session gate
//! - [`contact`]: contact form validation and delivery
//! - [`model`]: the content document
//! - [`config`]: layered configuration
//! - [`init`]: site root resolution and between-invocation state
//! - [`error`]: error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod contact;
pub mod diff;
pub mod error;
pub mod gateway;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
pub mod workflow;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
