use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::{DocumentId, NewDocument};
use crate::store::DocumentStore;

/// Creates a document owned by the caller.
///
/// The parent id is taken on trust: it is not checked for existence or
/// ownership. A bogus parent simply yields a document no sidebar will show.
pub fn run<S: DocumentStore>(
    store: &mut S,
    caller: Option<&Identity>,
    title: String,
    parent_id: Option<DocumentId>,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let doc = store.insert(NewDocument {
        title,
        owner_id: caller.subject().to_string(),
        parent_id,
    })?;
    tracing::debug!(document = %doc.id, parent = ?doc.parent_id, "created document");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document created: {}",
        doc.title
    )));
    result.affected_documents.push(doc);
    Ok(result)
}
