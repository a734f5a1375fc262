use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::DocumentId;
use crate::store::DocumentStore;

use super::helpers::{collect_descendants, owned_document, plural};

/// Permanently deletes a document.
///
/// By default only the document itself goes: its children keep pointing at
/// the deleted id and drop out of every listing, sidebar included. Any
/// archive state is accepted. With `recursive`, the whole subtree is deleted
/// in one batch instead.
pub fn run<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
    recursive: bool,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let target = owned_document(store, caller, id)?;

    let mut result = CmdResult::default();

    if recursive {
        let descendants = collect_descendants(store, caller.subject(), &target.id)?;
        let ids: Vec<DocumentId> = std::iter::once(target.id)
            .chain(descendants.iter().map(|doc| doc.id))
            .collect();
        let removed = store.delete_batch(&ids)?;
        tracing::debug!(document = %target.id, removed = removed.len(), "removed subtree");

        result.add_message(CmdMessage::success(format!(
            "Permanently deleted: {}",
            target.title
        )));
        if !descendants.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "And {} below it",
                plural(descendants.len(), "document")
            )));
        }
        return Ok(result.with_affected_documents(removed));
    }

    let orphaned = store
        .by_owner_parent(caller.subject(), Some(&target.id))?
        .len();
    let removed = store.delete(&target.id)?;
    tracing::debug!(document = %removed.id, orphaned, "removed document");

    result.add_message(CmdMessage::success(format!(
        "Permanently deleted: {}",
        removed.title
    )));
    if orphaned > 0 {
        tracing::warn!(document = %removed.id, orphaned, "removal left orphaned children");
        result.add_message(CmdMessage::warning(format!(
            "{} left without a parent and hidden from the sidebar",
            plural(orphaned, "document")
        )));
    }
    result.affected_documents.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{archive, trash};
    use crate::commands::MessageLevel;
    use crate::error::JotterError;
    use crate::store::memory::fixtures::{identity, StoreFixture};

    #[test]
    fn removes_archived_document() {
        let mut fx = StoreFixture::new();
        let id = fx.add_archived("u1", "Old", None);
        let me = identity("u1");

        let result = run(&mut fx.store, Some(&me), &id, false).unwrap();
        assert_eq!(result.primary_id(), Some(id));
        assert!(!fx.exists(id));
        assert!(trash::run(&fx.store, Some(&me), None)
            .unwrap()
            .listed_documents
            .is_empty());
    }

    #[test]
    fn removes_live_document_too() {
        let mut fx = StoreFixture::new();
        let id = fx.add("u1", "Live", None);
        run(&mut fx.store, Some(&identity("u1")), &id, false).unwrap();
        assert!(!fx.exists(id));
    }

    #[test]
    fn plain_remove_leaves_orphans_behind() {
        let mut fx = StoreFixture::new();
        let me = identity("u1");
        let ids = fx.chain("u1", &["Parent", "Child", "Grandchild"]);
        archive::run(&mut fx.store, Some(&me), &ids[0]).unwrap();

        let result = run(&mut fx.store, Some(&me), &ids[0], false).unwrap();
        assert_eq!(result.affected_documents.len(), 1);
        assert!(!fx.exists(ids[0]));
        assert!(fx.exists(ids[1]));
        assert!(fx.exists(ids[2]));
        assert_eq!(fx.get(ids[1]).parent_id, Some(ids[0]));

        let warning = result
            .messages
            .iter()
            .find(|m| m.level == MessageLevel::Warning)
            .unwrap();
        assert!(warning.content.starts_with("1 document"));

        // Orphans stay in the trash and can still be removed one by one.
        let trashed = trash::run(&fx.store, Some(&me), None).unwrap();
        assert_eq!(trashed.listed_documents.len(), 2);
    }

    #[test]
    fn recursive_remove_deletes_subtree() {
        let mut fx = StoreFixture::new();
        let me = identity("u1");
        let ids = fx.chain("u1", &["A", "B", "C"]);
        let sibling = fx.add("u1", "Sibling", None);

        let result = run(&mut fx.store, Some(&me), &ids[0], true).unwrap();
        assert_eq!(result.affected_documents.len(), 3);
        for id in &ids {
            assert!(!fx.exists(*id));
        }
        assert!(fx.exists(sibling));
        assert!(result
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
    }

    #[test]
    fn recursive_remove_survives_cycles() {
        let mut fx = StoreFixture::new();
        let ids = fx.chain("u1", &["A", "B"]);
        fx.force_parent(ids[0], Some(ids[1]));

        let result = run(&mut fx.store, Some(&identity("u1")), &ids[0], true).unwrap();
        assert_eq!(result.affected_documents.len(), 2);
        assert!(!fx.exists(ids[0]));
        assert!(!fx.exists(ids[1]));
    }

    #[test]
    fn non_owner_cannot_remove() {
        let mut fx = StoreFixture::new();
        let id = fx.add_archived("u1", "Old", None);
        let result = run(&mut fx.store, Some(&identity("u2")), &id, true);
        assert!(matches!(result, Err(JotterError::Unauthorized)));
        assert!(fx.exists(id));
    }

    #[test]
    fn removing_missing_is_not_found() {
        let mut fx = StoreFixture::new();
        let missing = uuid::Uuid::new_v4();
        assert!(matches!(
            run(&mut fx.store, Some(&identity("u1")), &missing, false),
            Err(JotterError::NotFound(_))
        ));
    }
}
