use super::backend::{DocumentTable, StorageBackend};
use crate::error::{JotterError, Result};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the library is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    table: RefCell<DocumentTable>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_table(&self) -> Result<DocumentTable> {
        Ok(self.table.borrow().clone())
    }

    fn save_table(&self, table: &DocumentTable) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JotterError::Store("Simulated write error".to_string()));
        }
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let backend = MemBackend::new();
        let table = backend.load_table().unwrap();
        assert_eq!(table.next_sequence, 0);
        assert!(table.documents.is_empty());
    }

    #[test]
    fn simulated_error_blocks_save() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let table = DocumentTable {
            next_sequence: 3,
            ..Default::default()
        };
        assert!(matches!(
            backend.save_table(&table),
            Err(JotterError::Store(_))
        ));
        assert_eq!(backend.load_table().unwrap().next_sequence, 0);
    }
}
