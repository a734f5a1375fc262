//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every jotter operation, whichever client drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (selectors are resolved to ids via [`JotterApi::resolve`])
//! - **Applies the error disclosure policy** to owner-checked operations
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Identity lookup**: callers pass `Option<&Identity>` on every call
//!
//! ## Error Disclosure
//!
//! Commands distinguish `NotFound` from `Unauthorized`. Under
//! [`ErrorDisclosure::Conceal`] (the default) the facade folds `NotFound` into
//! `Unauthorized` for every operation that takes a caller, so a user cannot
//! tell "does not exist" from "belongs to someone else". The public read path,
//! [`JotterApi::get_published_by_id`], always reports `NotFound` as is.
//!
//! ## Generic Over DocumentStore
//!
//! `JotterApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `JotterApi<FileStore>`
//! - Testing: `JotterApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and the disclosure policy. Command logic is tested
//! in the command modules, storage in the store modules.

use crate::commands::{self, CmdResult};
use crate::config::ErrorDisclosure;
use crate::error::{JotterError, Result};
use crate::identity::Identity;
use crate::model::{DocumentId, DocumentUpdate};
use crate::selector::{self, DocumentSelector};
use crate::store::DocumentStore;

pub struct JotterApi<S: DocumentStore> {
    store: S,
    disclosure: ErrorDisclosure,
}

impl<S: DocumentStore> JotterApi<S> {
    pub fn new(store: S, disclosure: ErrorDisclosure) -> Self {
        Self { store, disclosure }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn disclosure(&self) -> ErrorDisclosure {
        self.disclosure
    }

    fn disclose<T>(&self, result: Result<T>) -> Result<T> {
        match self.disclosure {
            ErrorDisclosure::Conceal => result.map_err(|e| e.conceal()),
            ErrorDisclosure::Reveal => result,
        }
    }

    pub fn create_document(
        &mut self,
        caller: Option<&Identity>,
        title: String,
        parent_id: Option<DocumentId>,
    ) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, caller, title, parent_id);
        self.disclose(result)
    }

    pub fn get_sidebar(
        &self,
        caller: Option<&Identity>,
        parent_id: Option<DocumentId>,
    ) -> Result<CmdResult> {
        self.disclose(commands::sidebar::run(&self.store, caller, parent_id))
    }

    pub fn get_tree(&self, caller: Option<&Identity>) -> Result<CmdResult> {
        self.disclose(commands::tree::run(&self.store, caller))
    }

    pub fn archive_document(
        &mut self,
        caller: Option<&Identity>,
        id: &DocumentId,
    ) -> Result<CmdResult> {
        let result = commands::archive::run(&mut self.store, caller, id);
        self.disclose(result)
    }

    pub fn get_trash(
        &self,
        caller: Option<&Identity>,
        title_filter: Option<&str>,
    ) -> Result<CmdResult> {
        self.disclose(commands::trash::run(&self.store, caller, title_filter))
    }

    pub fn restore_document(
        &mut self,
        caller: Option<&Identity>,
        id: &DocumentId,
    ) -> Result<CmdResult> {
        let result = commands::restore::run(&mut self.store, caller, id);
        self.disclose(result)
    }

    pub fn remove_document(
        &mut self,
        caller: Option<&Identity>,
        id: &DocumentId,
        recursive: bool,
    ) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.store, caller, id, recursive);
        self.disclose(result)
    }

    pub fn get_search(&self, caller: Option<&Identity>, term: Option<&str>) -> Result<CmdResult> {
        self.disclose(commands::search::run(&self.store, caller, term))
    }

    pub fn get_by_id(&self, caller: Option<&Identity>, id: &DocumentId) -> Result<CmdResult> {
        self.disclose(commands::get::by_id(&self.store, caller, id))
    }

    /// Public read. Needs no identity and is never subject to concealment.
    pub fn get_published_by_id(&self, id: &DocumentId) -> Result<CmdResult> {
        commands::get::published(&self.store, id)
    }

    pub fn update_document(
        &mut self,
        caller: Option<&Identity>,
        id: &DocumentId,
        update: DocumentUpdate,
    ) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, caller, id, update);
        self.disclose(result)
    }

    pub fn remove_icon(&mut self, caller: Option<&Identity>, id: &DocumentId) -> Result<CmdResult> {
        let result = commands::update::remove_icon(&mut self.store, caller, id);
        self.disclose(result)
    }

    pub fn remove_cover_image(
        &mut self,
        caller: Option<&Identity>,
        id: &DocumentId,
    ) -> Result<CmdResult> {
        let result = commands::update::remove_cover_image(&mut self.store, caller, id);
        self.disclose(result)
    }

    /// Resolves a user-typed reference (full id or unique prefix) to an id.
    pub fn resolve(&self, caller: Option<&Identity>, input: &str) -> Result<DocumentId> {
        let selector: DocumentSelector = input.parse()?;
        self.disclose(selector::resolve(&self.store, caller, &selector))
    }

    /// Resolves a reference for the public read path.
    ///
    /// Anonymous callers have no documents to match a prefix against, so they
    /// must give the full id. A signed-in caller can still use a prefix of one
    /// of their own documents.
    pub fn resolve_public(&self, caller: Option<&Identity>, input: &str) -> Result<DocumentId> {
        let selector: DocumentSelector = input.parse()?;
        match selector {
            DocumentSelector::Id(id) => Ok(id),
            DocumentSelector::Prefix(prefix) if caller.is_none() => {
                Err(JotterError::InvalidState(format!(
                    "'{}' is only a prefix, previews without a user need the full document id",
                    prefix
                )))
            }
            selector => self.disclose(selector::resolve(&self.store, caller, &selector)),
        }
    }
}
