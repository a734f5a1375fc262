use crate::commands::CmdResult;
use crate::error::{JotterError, Result};
use crate::identity::{require, Identity};
use crate::model::DocumentId;
use crate::store::DocumentStore;

use super::helpers::owned_document;

/// Owner read: the editor view of a document, archived or not.
pub fn by_id<S: DocumentStore>(
    store: &S,
    caller: Option<&Identity>,
    id: &DocumentId,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let doc = owned_document(store, caller, id)?;
    Ok(CmdResult::default().with_listed_documents(vec![doc]))
}

/// Public read. No identity is needed, but only documents that are published
/// and not in the trash are served.
pub fn published<S: DocumentStore>(store: &S, id: &DocumentId) -> Result<CmdResult> {
    let doc = store.get(id)?.ok_or(JotterError::NotFound(*id))?;
    if !doc.is_published {
        return Err(JotterError::InvalidState(format!(
            "document {} is not published",
            doc.id
        )));
    }
    if doc.is_archived {
        return Err(JotterError::InvalidState(format!(
            "document {} is in the trash",
            doc.id
        )));
    }
    Ok(CmdResult::default().with_listed_documents(vec![doc]))
}
