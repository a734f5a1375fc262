use crate::commands::CmdResult;
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::store::DocumentStore;

use super::helpers::newest_first;

/// Every archived document of the caller, at any depth, newest first.
///
/// `title_filter` narrows the list with a case-insensitive substring match,
/// the same filter the trash box applies as the user types.
pub fn run<S: DocumentStore>(
    store: &S,
    caller: Option<&Identity>,
    title_filter: Option<&str>,
) -> Result<CmdResult> {
    let caller = require(caller)?;
    let docs = store
        .by_owner(caller.subject())?
        .into_iter()
        .filter(|doc| doc.is_archived)
        .filter(|doc| title_filter.map_or(true, |term| doc.title_matches(term)))
        .collect();

    Ok(CmdResult::default().with_listed_documents(newest_first(docs)))
}
