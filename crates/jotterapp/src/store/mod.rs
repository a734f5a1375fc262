//! # Storage Layer
//!
//! The document tree service never talks to persistence directly: everything goes
//! through the [`DocumentStore`] trait, which models the managed table the
//! service was designed against. It offers point reads and writes by id, plus
//! the two indexed queries the service needs (`by owner` and `by owner + parent`).
//!
//! ## Two Layers
//!
//! - [`DocumentStore`] is the "what": documents, patches, queries, batches.
//! - [`backend::StorageBackend`] is the "how": load and save the whole table.
//!
//! [`doc_store::DocStore`] bridges the two. Each write is a single
//! load-modify-save of the table, which gives two guarantees the service relies on:
//!
//! 1. **Per-record atomicity**: an insert, patch or delete is all or nothing.
//! 2. **Batch atomicity**: [`DocumentStore::patch_batch`] and
//!    [`DocumentStore::delete_batch`] validate every id before touching anything
//!    and then save once. A cascade either lands completely or not at all.
//!
//! ## Ordering
//!
//! Query results come back in insertion order (ascending `sequence`). Callers
//! that want "most recent first" reverse them.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `DocStore<MemBackend>`, for tests.
//! - [`fs::FileStore`]: `DocStore<FsBackend>`, a `documents.json` table on disk.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── documents.json     # { "nextSequence": N, "documents": { "<uuid>": {...} } }
//! ```

use crate::error::{JotterError, Result};
use crate::model::{Document, DocumentId, DocumentPatch, NewDocument};

pub mod backend;
pub mod doc_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for the document table.
pub trait DocumentStore {
    /// Insert a new document; the store assigns id, timestamps and sequence.
    fn insert(&mut self, new: NewDocument) -> Result<Document>;

    /// Point read. `Ok(None)` when the id does not exist.
    fn get(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Apply several patches as one write. Fails with `NotFound` before
    /// writing anything if any id is missing.
    fn patch_batch(&mut self, patches: &[(DocumentId, DocumentPatch)]) -> Result<Vec<Document>>;

    /// Remove several documents as one write. Fails with `NotFound` before
    /// removing anything if any id is missing.
    fn delete_batch(&mut self, ids: &[DocumentId]) -> Result<Vec<Document>>;

    /// All documents of one owner, in insertion order.
    fn by_owner(&self, owner: &str) -> Result<Vec<Document>>;

    /// Documents of one owner directly under `parent` (`None` = roots), in
    /// insertion order.
    fn by_owner_parent(&self, owner: &str, parent: Option<&DocumentId>) -> Result<Vec<Document>> {
        Ok(self
            .by_owner(owner)?
            .into_iter()
            .filter(|doc| doc.parent_id.as_ref() == parent)
            .collect())
    }

    fn patch(&mut self, id: &DocumentId, patch: &DocumentPatch) -> Result<Document> {
        let mut patched = self.patch_batch(&[(*id, patch.clone())])?;
        patched.pop().ok_or(JotterError::NotFound(*id))
    }

    fn delete(&mut self, id: &DocumentId) -> Result<Document> {
        let mut removed = self.delete_batch(&[*id])?;
        removed.pop().ok_or(JotterError::NotFound(*id))
    }
}
