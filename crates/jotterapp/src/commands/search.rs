use crate::commands::CmdResult;
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::store::DocumentStore;

use super::helpers::newest_first;

/// Live documents of the caller, at any depth, newest first. Without a term
/// (or with a blank one) this is the full search index.
pub fn run<S: DocumentStore>(
    store: &S,
    caller: Option<&Identity>,
    term: Option<&str>,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let docs = store
        .by_owner(caller.subject())?
        .into_iter()
        .filter(|doc| !doc.is_archived)
        .filter(|doc| term.map_or(true, |term| doc.title_matches(term)))
        .collect();

    Ok(CmdResult::default().with_listed_documents(newest_first(docs)))
}
