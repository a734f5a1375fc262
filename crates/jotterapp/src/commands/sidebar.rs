use crate::commands::CmdResult;
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::DocumentId;
use crate::store::DocumentStore;

use super::helpers::newest_first;

/// Lists one level of the caller's tree: the live documents directly under
/// `parent_id` (roots when `None`), most recent first.
///
/// A parent that does not resolve to one of the caller's documents yields an
/// empty level, so children of a removed parent never surface here.
pub fn run<S: DocumentStore>(
    store: &S,
    caller: Option<&Identity>,
    parent_id: Option<DocumentId>,
) -> Result<CmdResult> {
    let caller = require(caller)?;

    if let Some(parent) = &parent_id {
        let resolves = store
            .get(parent)?
            .is_some_and(|doc| doc.is_owned_by(caller.subject()));
        if !resolves {
            return Ok(CmdResult::default());
        }
    }

    let docs = store
        .by_owner_parent(caller.subject(), parent_id.as_ref())?
        .into_iter()
        .filter(|doc| !doc.is_archived)
        .collect();

    Ok(CmdResult::default().with_listed_documents(newest_first(docs)))
}
