//! # Domain Model: Documents, Patches and Trees
//!
//! A [`Document`] is a node in its owner's content forest. Roots have no
//! `parent_id`; every other document points at its parent by id. The tree is
//! never stored as nested data: it only exists as parent pointers, and every
//! "tree" view is rebuilt from them on demand.
//!
//! ## Field Ownership
//!
//! | Field | Set by | Mutable via |
//! |-------|--------|-------------|
//! | `id`, `sequence`, `created_at` | the store on insert | never |
//! | `owner_id` | create | never |
//! | `title`, `content`, `icon`, `cover_image`, `is_published` | create / update | [`DocumentUpdate`] |
//! | `is_archived`, `parent_id` | create / archive / restore | [`DocumentPatch`] only |
//!
//! ## Ordering
//!
//! Listings are "most recent first". Wall-clock timestamps can collide, so the
//! ordering key is `sequence`, a strictly increasing number handed out by the
//! store on every insert.
//!
//! ## Two Patch Types
//!
//! - [`DocumentPatch`] is the store-level partial write. Clearable fields are
//!   `Option<Option<T>>`: `None` leaves the field alone, `Some(None)` clears it.
//! - [`DocumentUpdate`] is what callers may change. It converts into a patch and
//!   can never touch archive state or parent links, which belong to the
//!   archive/restore cascades.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type DocumentId = Uuid;

/// Title used by clients that create a document without naming it.
pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub owner_id: String,
    #[serde(default)]
    pub parent_id: Option<DocumentId>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sequence: u64,
}

impl Document {
    /// Materializes a pending insert. Only stores call this.
    pub fn from_new(new: NewDocument, sequence: u64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            owner_id: new.owner_id,
            parent_id: new.parent_id,
            content: None,
            cover_image: None,
            icon: None,
            is_archived: false,
            is_published: false,
            created_at: now,
            updated_at: now,
            sequence,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_owned_by(&self, subject: &str) -> bool {
        self.owner_id == subject
    }

    /// Case-insensitive substring match on the title. An empty term matches
    /// everything.
    pub fn title_matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

/// A document waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub owner_id: String,
    pub parent_id: Option<DocumentId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub is_published: Option<bool>,
    pub is_archived: Option<bool>,
    pub parent_id: Option<Option<DocumentId>>,
}

impl DocumentPatch {
    pub fn archived(flag: bool) -> Self {
        Self {
            is_archived: Some(flag),
            ..Default::default()
        }
    }

    pub fn clear_icon() -> Self {
        Self {
            icon: Some(None),
            ..Default::default()
        }
    }

    pub fn clear_cover_image() -> Self {
        Self {
            cover_image: Some(None),
            ..Default::default()
        }
    }

    /// Detaches the document from its parent, making it a root.
    pub fn promote_to_root(mut self) -> Self {
        self.parent_id = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, doc: &mut Document) {
        if let Some(title) = &self.title {
            doc.title = title.clone();
        }
        if let Some(content) = &self.content {
            doc.content = content.clone();
        }
        if let Some(cover_image) = &self.cover_image {
            doc.cover_image = cover_image.clone();
        }
        if let Some(icon) = &self.icon {
            doc.icon = icon.clone();
        }
        if let Some(flag) = self.is_published {
            doc.is_published = flag;
        }
        if let Some(flag) = self.is_archived {
            doc.is_archived = flag;
        }
        if let Some(parent_id) = self.parent_id {
            doc.parent_id = parent_id;
        }
        doc.updated_at = Utc::now();
    }
}

/// Caller-facing partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub icon: Option<String>,
    pub is_published: Option<bool>,
}

impl DocumentUpdate {
    pub fn published(flag: bool) -> Self {
        Self {
            is_published: Some(flag),
            ..Default::default()
        }
    }

    pub fn into_patch(self) -> DocumentPatch {
        DocumentPatch {
            title: self.title,
            content: self.content.map(Some),
            cover_image: self.cover_image.map(Some),
            icon: self.icon.map(Some),
            is_published: self.is_published,
            ..Default::default()
        }
    }
}

/// One node of a rebuilt document tree.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentNode {
    pub document: Document,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Number of documents in this subtree, including the node itself.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Flattens before dropping so a long chain is not torn down one stack frame
// per level.
impl Drop for DocumentNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
