use super::doc_store::DocStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::identity::Identity;
    use crate::model::{Document, DocumentId, DocumentPatch, NewDocument};
    use crate::store::DocumentStore;

    pub fn identity(subject: &str) -> Identity {
        Identity::new(subject).expect("fixture subjects are never blank")
    }

    /// Builds document forests directly against the store, bypassing the
    /// command layer (and therefore its ownership checks).
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn add(&mut self, owner: &str, title: &str, parent: Option<DocumentId>) -> DocumentId {
            self.store
                .insert(NewDocument {
                    title: title.to_string(),
                    owner_id: owner.to_string(),
                    parent_id: parent,
                })
                .unwrap()
                .id
        }

        pub fn add_archived(
            &mut self,
            owner: &str,
            title: &str,
            parent: Option<DocumentId>,
        ) -> DocumentId {
            let id = self.add(owner, title, parent);
            self.store
                .patch(&id, &DocumentPatch::archived(true))
                .unwrap();
            id
        }

        /// A straight line of nested documents: `titles[0]` is the root and
        /// each following title is a child of the previous one.
        pub fn chain(&mut self, owner: &str, titles: &[&str]) -> Vec<DocumentId> {
            let mut ids = Vec::with_capacity(titles.len());
            let mut parent = None;
            for title in titles {
                let id = self.add(owner, title, parent);
                ids.push(id);
                parent = Some(id);
            }
            ids
        }

        /// Rewrites a parent link with no validation at all. Used to build
        /// corrupted (e.g. cyclic) trees.
        pub fn force_parent(&mut self, id: DocumentId, parent: Option<DocumentId>) {
            self.store
                .patch(
                    &id,
                    &DocumentPatch {
                        parent_id: Some(parent),
                        ..Default::default()
                    },
                )
                .unwrap();
        }

        pub fn get(&self, id: DocumentId) -> Document {
            self.store.get(&id).unwrap().expect("fixture document exists")
        }

        pub fn exists(&self, id: DocumentId) -> bool {
            self.store.get(&id).unwrap().is_some()
        }
    }
}
