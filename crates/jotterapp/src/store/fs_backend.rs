use super::backend::{DocumentTable, StorageBackend};
use crate::error::{JotterError, Result};
use fd_lock::RwLock;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const TABLE_FILE: &str = "documents.json";
pub const LOCK_FILE: &str = "documents.lock";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self) -> PathBuf {
        self.root.join(TABLE_FILE)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(JotterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_table(&self) -> Result<DocumentTable> {
        let data_file = self.table_path();
        if !data_file.exists() {
            return Ok(DocumentTable::default());
        }
        let content = fs::read_to_string(data_file).map_err(JotterError::Io)?;
        if content.trim().is_empty() {
            return Ok(DocumentTable::default());
        }
        let table: DocumentTable =
            serde_json::from_str(&content).map_err(JotterError::Serialization)?;
        Ok(table)
    }

    fn save_table(&self, table: &DocumentTable) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let data_file = self.table_path();
        let content = serde_json::to_string_pretty(table).map_err(JotterError::Serialization)?;

        let tmp_file = self.root.join(format!(".documents-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(JotterError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(JotterError::Io)?;

        tracing::debug!(path = %data_file.display(), documents = table.documents.len(), "saved document table");
        Ok(())
    }

    /// Advisory lock on `documents.lock`, held until `f` returns. Readers skip
    /// it: the rename in `save_table` already keeps them from seeing a
    /// half-written table.
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.ensure_dir(&self.root)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(JotterError::Io)?;
        let mut lock = RwLock::new(file);
        let _guard = lock.write().map_err(JotterError::Io)?;
        f()
    }
}
