use crate::error::{JotterError, Result};
use crate::identity::Identity;
use crate::model::{Document, DocumentId};
use crate::store::DocumentStore;
use std::collections::{HashMap, HashSet};

/// Fetches `id` and checks that `caller` owns it.
///
/// Missing documents are `NotFound`, foreign ones `Unauthorized`. Folding the
/// two together is the API facade's call, not ours.
pub fn owned_document<S: DocumentStore>(
    store: &S,
    caller: &Identity,
    id: &DocumentId,
) -> Result<Document> {
    let doc = store.get(id)?.ok_or(JotterError::NotFound(*id))?;
    if !doc.is_owned_by(caller.subject()) {
        return Err(JotterError::Unauthorized);
    }
    Ok(doc)
}

/// Every document below `root` in `owner`'s tree, parents before children.
///
/// One `by_owner` scan indexed by parent, then an explicit worklist over that
/// index. Each id is visited at most once: parent links that loop back (only
/// possible with corrupted data) are logged and skipped instead of walked
/// forever.
pub fn collect_descendants<S: DocumentStore>(
    store: &S,
    owner: &str,
    root: &DocumentId,
) -> Result<Vec<Document>> {
    let mut by_parent: HashMap<DocumentId, Vec<Document>> = HashMap::new();
    for doc in store.by_owner(owner)? {
        if let Some(parent) = doc.parent_id {
            by_parent.entry(parent).or_default().push(doc);
        }
    }

    let mut visited: HashSet<DocumentId> = HashSet::from([*root]);
    let mut pending: Vec<DocumentId> = vec![*root];
    let mut descendants = Vec::new();

    while let Some(parent) = pending.pop() {
        for child in by_parent.remove(&parent).unwrap_or_default() {
            if !visited.insert(child.id) {
                tracing::warn!(
                    document = %child.id,
                    parent = %parent,
                    "parent links form a cycle, skipping revisit"
                );
                continue;
            }
            pending.push(child.id);
            descendants.push(child);
        }
    }

    Ok(descendants)
}

/// Sorts most recent first.
pub fn newest_first(mut docs: Vec<Document>) -> Vec<Document> {
    docs.sort_by(|a, b| b.sequence.cmp(&a.sequence));
    docs
}

pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
