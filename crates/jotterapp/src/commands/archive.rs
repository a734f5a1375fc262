use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::{DocumentId, DocumentPatch};
use crate::store::DocumentStore;

use super::helpers::{collect_descendants, owned_document, plural};

/// Archives a document and its whole subtree.
///
/// The subtree is gathered first, then every document is flagged in one batch
/// write: either all of them end up archived or none do. Re-archiving an
/// archived subtree is harmless.
pub fn run<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let target = owned_document(store, caller, id)?;
    let descendants = collect_descendants(store, caller.subject(), &target.id)?;

    let patches: Vec<_> = std::iter::once(target.id)
        .chain(descendants.iter().map(|doc| doc.id))
        .map(|doc_id| (doc_id, DocumentPatch::archived(true)))
        .collect();
    let archived = store.patch_batch(&patches)?;
    tracing::debug!(document = %target.id, descendants = descendants.len(), "archived subtree");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved to trash: {}",
        target.title
    )));
    if !descendants.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "And {} below it",
            plural(descendants.len(), "document")
        )));
    }
    Ok(result.with_affected_documents(archived))
}
