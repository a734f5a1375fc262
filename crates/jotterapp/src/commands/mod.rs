//! # Command Layer
//!
//! This module contains the **core business logic** of jotter. Each operation lives
//! in its own submodule as a plain function over a
//! [`DocumentStore`](crate::store::DocumentStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Resolve the caller and enforce ownership
//! - Walk the document tree for cascading operations
//! - Return structured [`CmdResult`] values with affected/listed documents and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **Error display policy**: commands always report the precise error kind
//!   (`NotFound` vs `Unauthorized`); the API facade decides what callers see
//! - **Identity lookup**: the caller is always passed in explicitly
//!
//! ## Cascades
//!
//! Archive, restore and recursive remove share one traversal,
//! [`helpers::collect_descendants`]: one `by_owner` scan indexed by parent,
//! walked with an explicit worklist and a visited set. The whole cascade is then
//! written with a single batch call, so it lands completely or not at all.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the `StoreFixture` builder, and cover ownership, cascade
//! and ordering rules directly.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a document (optionally under a parent)
//! - [`sidebar`]: One level of the caller's tree
//! - [`tree`]: The caller's whole tree, nested
//! - [`archive`]: Cascading soft-delete
//! - [`restore`]: Cascading undelete with root promotion
//! - [`remove`]: Permanent delete (single or recursive)
//! - [`trash`]: Archived documents
//! - [`search`]: Title search over live documents
//! - [`get`]: Owner read and public (published) read
//! - [`update`]: Partial updates, icon and cover removal
//! - [`helpers`]: Ownership checks, traversal, ordering

use crate::model::{Document, DocumentId, DocumentNode};
use serde::Serialize;

pub mod archive;
pub mod create;
pub mod get;
pub mod helpers;
pub mod remove;
pub mod restore;
pub mod search;
pub mod sidebar;
pub mod trash;
pub mod tree;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    /// Documents written by the operation, in the order they were written.
    pub affected_documents: Vec<Document>,
    /// Documents returned by a query, in display order.
    pub listed_documents: Vec<Document>,
    /// Nested view, filled by tree queries only.
    pub tree: Vec<DocumentNode>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_documents(mut self, documents: Vec<Document>) -> Self {
        self.affected_documents = documents;
        self
    }

    pub fn with_listed_documents(mut self, documents: Vec<Document>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_tree(mut self, tree: Vec<DocumentNode>) -> Self {
        self.tree = tree;
        self
    }

    /// The document a single-target mutation acted on.
    pub fn primary(&self) -> Option<&Document> {
        self.affected_documents.first()
    }

    pub fn primary_id(&self) -> Option<DocumentId> {
        self.primary().map(|doc| doc.id)
    }
}
