use crate::commands::CmdResult;
use crate::error::Result;
use crate::identity::{require, Identity};
use crate::model::{Document, DocumentId, DocumentNode};
use crate::store::DocumentStore;
use std::collections::HashMap;

use super::helpers::newest_first;

/// The caller's whole live tree, nested, each level newest first.
///
/// Equivalent to expanding every sidebar level: only documents reachable from a
/// live root show up, so orphans and anything below an archived document are
/// left out.
pub fn run<S: DocumentStore>(store: &S, caller: Option<&Identity>) -> Result<CmdResult> {
    let caller = require(caller)?;

    let mut levels: HashMap<Option<DocumentId>, Vec<Document>> = HashMap::new();
    for doc in store.by_owner(caller.subject())? {
        if !doc.is_archived {
            levels.entry(doc.parent_id).or_default().push(doc);
        }
    }

    Ok(CmdResult::default().with_tree(nest(levels)))
}

/// Builds the nesting with an explicit stack, so depth is bounded by memory
/// rather than by the thread stack.
///
/// Each level is taken out of `levels` once, so a document is placed at most
/// once even when parent links loop. Documents on such loops are never
/// reached from a root and are left out.
fn nest(mut levels: HashMap<Option<DocumentId>, Vec<Document>>) -> Vec<DocumentNode> {
    // Pre-order: every parent lands before its children, siblings newest first.
    let mut placed: Vec<(Document, Option<usize>)> = Vec::new();
    let mut pending: Vec<(Document, Option<usize>)> = Vec::new();
    push_level(&mut pending, levels.remove(&None).unwrap_or_default(), None);

    while let Some((doc, parent)) = pending.pop() {
        let index = placed.len();
        let children = levels.remove(&Some(doc.id)).unwrap_or_default();
        push_level(&mut pending, children, Some(index));
        placed.push((doc, parent));
    }

    // Assemble bottom-up: walking pre-order backwards finishes every child
    // before its parent.
    let mut children: Vec<Vec<DocumentNode>> = placed.iter().map(|_| Vec::new()).collect();
    let mut roots = Vec::new();
    while let Some((document, parent)) = placed.pop() {
        let mut below = std::mem::take(&mut children[placed.len()]);
        below.reverse();
        let node = DocumentNode {
            document,
            children: below,
        };
        match parent {
            Some(parent) => children[parent].push(node),
            None => roots.push(node),
        }
    }
    roots.reverse();
    roots
}

fn push_level(
    pending: &mut Vec<(Document, Option<usize>)>,
    docs: Vec<Document>,
    parent: Option<usize>,
) {
    // Reversed so the newest sibling is popped first.
    pending.extend(
        newest_first(docs)
            .into_iter()
            .rev()
            .map(|doc| (doc, parent)),
    );
}
