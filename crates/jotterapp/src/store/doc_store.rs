use super::backend::{DocumentTable, StorageBackend};
use super::DocumentStore;
use crate::error::{JotterError, Result};
use crate::model::{Document, DocumentId, DocumentPatch, NewDocument};
use std::collections::HashSet;

pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn sorted(mut docs: Vec<Document>) -> Vec<Document> {
        docs.sort_by_key(|doc| doc.sequence);
        docs
    }

    fn ensure_present(table: &DocumentTable, ids: impl IntoIterator<Item = DocumentId>) -> Result<()> {
        for id in ids {
            if !table.documents.contains_key(&id) {
                return Err(JotterError::NotFound(id));
            }
        }
        Ok(())
    }
}

impl<B: StorageBackend> DocumentStore for DocStore<B> {
    fn insert(&mut self, new: NewDocument) -> Result<Document> {
        let backend = &self.backend;
        backend.with_write_lock(|| {
            let mut table = backend.load_table()?;
            table.next_sequence += 1;
            let doc = Document::from_new(new, table.next_sequence);
            table.documents.insert(doc.id, doc.clone());
            backend.save_table(&table)?;
            Ok(doc)
        })
    }

    fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
        let table = self.backend.load_table()?;
        Ok(table.documents.get(id).cloned())
    }

    fn patch_batch(&mut self, patches: &[(DocumentId, DocumentPatch)]) -> Result<Vec<Document>> {
        if patches.is_empty() {
            return Ok(Vec::new());
        }
        let backend = &self.backend;
        backend.with_write_lock(|| {
            let mut table = backend.load_table()?;
            Self::ensure_present(&table, patches.iter().map(|(id, _)| *id))?;

            let mut patched = Vec::with_capacity(patches.len());
            for (id, patch) in patches {
                if let Some(doc) = table.documents.get_mut(id) {
                    patch.apply(doc);
                    patched.push(doc.clone());
                }
            }

            backend.save_table(&table)?;
            Ok(patched)
        })
    }

    fn delete_batch(&mut self, ids: &[DocumentId]) -> Result<Vec<Document>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let backend = &self.backend;
        backend.with_write_lock(|| {
            let mut table = backend.load_table()?;
            Self::ensure_present(&table, ids.iter().copied())?;

            let mut seen = HashSet::new();
            let removed: Vec<Document> = ids
                .iter()
                .filter(|id| seen.insert(**id))
                .filter_map(|id| table.documents.remove(id))
                .collect();

            backend.save_table(&table)?;
            Ok(removed)
        })
    }

    fn by_owner(&self, owner: &str) -> Result<Vec<Document>> {
        let table = self.backend.load_table()?;
        Ok(Self::sorted(
            table
                .documents
                .into_values()
                .filter(|doc| doc.is_owned_by(owner))
                .collect(),
        ))
    }

    fn by_owner_parent(&self, owner: &str, parent: Option<&DocumentId>) -> Result<Vec<Document>> {
        let table = self.backend.load_table()?;
        Ok(Self::sorted(
            table
                .documents
                .into_values()
                .filter(|doc| doc.is_owned_by(owner) && doc.parent_id.as_ref() == parent)
                .collect(),
        ))
    }
}
