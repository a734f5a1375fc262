use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::{DocumentId, DocumentPatch, DocumentUpdate};
use crate::store::DocumentStore;

use super::helpers::owned_document;

/// Applies a partial update to one of the caller's documents. Fields left as
/// `None` keep their value. Archive state and parent links are out of reach.
pub fn run<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
    update: DocumentUpdate,
) -> Result<CmdResult> {
    let publish_change = update.is_published;
    let patch = update.into_patch();
    let message = match publish_change {
        Some(true) if patch_only_publishes(&patch) => "Published",
        Some(false) if patch_only_publishes(&patch) => "Unpublished",
        _ => "Document updated",
    };
    apply(store, caller, id, patch, message)
}

pub fn remove_icon<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
) -> Result<CmdResult> {
    apply(store, caller, id, DocumentPatch::clear_icon(), "Icon removed")
}

pub fn remove_cover_image<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
) -> Result<CmdResult> {
    apply(
        store,
        caller,
        id,
        DocumentPatch::clear_cover_image(),
        "Cover image removed",
    )
}

fn patch_only_publishes(patch: &DocumentPatch) -> bool {
    DocumentPatch {
        is_published: None,
        ..patch.clone()
    }
    .is_empty()
}

fn apply<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    id: &DocumentId,
    patch: DocumentPatch,
    message: &str,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let target = owned_document(store, caller, id)?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update: {}",
            target.title
        )));
        result.listed_documents.push(target);
        return Ok(result);
    }

    let updated = store.patch(&target.id, &patch)?;
    tracing::debug!(document = %updated.id, "{}", message.to_lowercase());

    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        message, updated.title
    )));
    result.affected_documents.push(updated);
    Ok(result)
}
