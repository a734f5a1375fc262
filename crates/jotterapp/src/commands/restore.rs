use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::{Document, DocumentId, DocumentPatch};
use crate::store::DocumentStore;

use super::helpers::{collect_descendants, owned_document, plural};

/// Restores a document and its whole subtree from the trash.
///
/// Only the restored document itself may be re-parented: when its parent is
/// still archived, missing, or not the caller's, it is promoted to a root so it
/// does not come back invisible under a hidden ancestor. Descendants keep their
/// parent links. Everything is written in one batch.
pub fn run<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let target = owned_document(store, caller, id)?;

    let promote = needs_root_promotion(store, caller, &target)?;
    let mut target_patch = DocumentPatch::archived(false);
    if promote {
        target_patch = target_patch.promote_to_root();
    }

    let descendants = collect_descendants(store, caller.subject(), &target.id)?;
    let mut patches = Vec::with_capacity(descendants.len() + 1);
    patches.push((target.id, target_patch));
    patches.extend(
        descendants
            .iter()
            .map(|doc| (doc.id, DocumentPatch::archived(false))),
    );
    let restored = store.patch_batch(&patches)?;
    tracing::debug!(
        document = %target.id,
        descendants = descendants.len(),
        promoted = promote,
        "restored subtree"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document restored: {}",
        target.title
    )));
    if !descendants.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "And {} below it",
            plural(descendants.len(), "document")
        )));
    }
    if promote {
        result.add_message(CmdMessage::info(
            "Its parent is not available, so it was moved to the top level",
        ));
    }
    Ok(result.with_affected_documents(restored))
}

fn needs_root_promotion<S: DocumentStore>(
    store: &S,
    caller: &Identity,
    target: &Document,
) -> Result<bool> {
    let Some(parent_id) = target.parent_id else {
        return Ok(false);
    };
    Ok(match store.get(&parent_id)? {
        Some(parent) => parent.is_archived || !parent.is_owned_by(caller.subject()),
        None => true,
    })
}
