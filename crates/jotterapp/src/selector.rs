//! Short references to documents.
//!
//! Users rarely type a full UUID. A [`DocumentSelector`] is either a complete
//! id or a prefix of its hyphenated form, at least [`MIN_PREFIX_LEN`]
//! characters long. Prefixes resolve among the caller's own documents only,
//! archived ones included.

use crate::error::{JotterError, Result};
use crate::identity::{require, Identity};
use crate::model::DocumentId;
use crate::store::DocumentStore;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSelector {
    Id(DocumentId),
    Prefix(String),
}

impl FromStr for DocumentSelector {
    type Err = JotterError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(DocumentSelector::Id(id));
        }
        let valid =
            s.len() >= MIN_PREFIX_LEN && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
        if !valid {
            return Err(JotterError::InvalidState(format!(
                "'{}' is not a document id or an id prefix of at least {} hex characters",
                s, MIN_PREFIX_LEN
            )));
        }
        Ok(DocumentSelector::Prefix(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for DocumentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSelector::Id(id) => write!(f, "{}", id),
            DocumentSelector::Prefix(prefix) => f.write_str(prefix),
        }
    }
}

/// Turns a selector into a document id.
///
/// Full ids pass through without a lookup, so ownership is left to the
/// operation that uses them. Prefixes need a caller and must match exactly one
/// of their documents.
pub fn resolve<S: DocumentStore>(
    store: &S,
    caller: Option<&Identity>,
    selector: &DocumentSelector,
) -> Result<DocumentId> {
    match selector {
        DocumentSelector::Id(id) => Ok(*id),
        DocumentSelector::Prefix(prefix) => {
            let caller = require(caller)?;
            let ids = store
                .by_owner(caller.subject())?
                .into_iter()
                .map(|doc| doc.id);
            match_prefix(ids, prefix)
        }
    }
}

fn match_prefix(ids: impl IntoIterator<Item = DocumentId>, prefix: &str) -> Result<DocumentId> {
    let matches: Vec<DocumentId> = ids
        .into_iter()
        .filter(|id| id.hyphenated().to_string().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(JotterError::InvalidState(format!(
            "no document matches '{}'",
            prefix
        ))),
        many => Err(JotterError::InvalidState(format!(
            "'{}' matches {} documents, use a longer prefix",
            prefix,
            many.len()
        ))),
    }
}
