//! # Jotter Architecture
//!
//! Jotter keeps a per-user forest of documents: pages nest under pages, go to
//! the trash as whole subtrees, come back from it, and can be shared read-only
//! by publishing them. This crate is the UI-agnostic core; the `jotter` binary
//! is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────┐
//! │ client (CLI, tests, ...) │  parses input, renders CmdResult
//! └────────────┬─────────────┘
//!              │ Option<&Identity>, ids / selectors
//! ┌────────────▼─────────────┐
//! │ api::JotterApi           │  dispatch + error disclosure policy
//! └────────────┬─────────────┘
//! ┌────────────▼─────────────┐
//! │ commands::*              │  ownership, cascades, ordering
//! └────────────┬─────────────┘
//! ┌────────────▼─────────────┐
//! │ store::DocumentStore     │  point reads/writes, indexed queries, batches
//! └────────────┬─────────────┘
//! ┌────────────▼─────────────┐
//! │ StorageBackend           │  MemBackend (tests) / FsBackend (documents.json)
//! └──────────────────────────┘
//! ```
//!
//! ## Tree Rules
//!
//! - Archiving a document archives everything below it.
//! - Restoring a document restores everything below it. If its own parent is
//!   still in the trash (or gone), it is promoted to a root.
//! - Removing a document is permanent and by default removes only that
//!   document; its children become orphans that no listing shows.
//!
//! Cascades are collected first and then written as one batch, so a failed
//! write never leaves a half-archived subtree behind.
//!
//! ## Modules
//!
//! - [`api`]: the facade clients talk to
//! - [`commands`]: one module per operation
//! - [`model`]: documents, patches and tree nodes
//! - [`store`]: the storage trait and its implementations
//! - [`identity`]: who is calling
//! - [`selector`]: ids and id prefixes
//! - [`config`] / [`init`]: configuration and context setup
//! - [`error`]: the crate error type

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod init;
pub mod model;
pub mod selector;
pub mod store;
