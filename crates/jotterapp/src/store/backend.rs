use crate::error::Result;
use crate::model::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The whole document table as persisted by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTable {
    /// Last sequence number handed out; the next insert gets `next_sequence + 1`.
    #[serde(default)]
    pub next_sequence: u64,
    #[serde(default)]
    pub documents: HashMap<DocumentId, Document>,
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocStore handles the "what" (ids, patches, queries, batches).
pub trait StorageBackend {
    /// Load the table. A backend with nothing stored yet returns an empty table.
    fn load_table(&self) -> Result<DocumentTable>;

    /// Replace the stored table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_table(&self, table: &DocumentTable) -> Result<()>;

    /// Run `f` while holding exclusive write access to the stored table.
    /// Every load-modify-save goes through here so that writers sharing the
    /// same storage never interleave. A backend with a single owner can run
    /// `f` directly.
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        f()
    }
}
