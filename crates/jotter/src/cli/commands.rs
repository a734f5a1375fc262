//! # CLI Layer
//!
//! This module is **one possible UI client** for jotter; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build the API, configuration and caller identity
//! 3. **Dispatch**: Resolve user-typed ids and call the matching API method
//! 4. **Output Formatting**: Hand results to `render`

use super::render::{self, OutputMode};
use super::setup::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use jotterapp::api::JotterApi;
use jotterapp::identity::{Identity, IdentityProvider};
use jotterapp::init::{initialize, Overrides};
use jotterapp::model::{DocumentUpdate, DEFAULT_TITLE};
use jotterapp::store::DocumentStore;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = initialize(Overrides {
        config_file: cli.config.clone(),
        data_dir: cli.data_dir.clone(),
        user: cli.user.clone(),
    })?;
    init_tracing(&ctx.config.log_filter, cli.verbose);

    let caller = ctx.identity.identity();
    let mode = OutputMode::from_flag(cli.json);
    let command = cli.command.unwrap_or(Commands::List { parent: None });

    let output = dispatch(&mut ctx.api, caller.as_ref(), command, mode)?;
    print!("{}", output);
    Ok(())
}

/// `RUST_LOG` wins, then `-v`, then the configured filter.
fn init_tracing(configured: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch<S: DocumentStore>(
    api: &mut JotterApi<S>,
    caller: Option<&Identity>,
    command: Commands,
    mode: OutputMode,
) -> Result<String> {
    tracing::debug!(?command, ?mode, "dispatching");
    let output = match command {
        Commands::Create { inside, title } => {
            let parent = inside
                .map(|selector| api.resolve(caller, &selector))
                .transpose()?;
            let title = title.join(" ");
            let title = if title.trim().is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title
            };
            let result = api.create_document(caller, title, parent)?;
            render::render_mutation(&result, mode)
        }
        Commands::List { parent } => {
            let parent = parent
                .map(|selector| api.resolve(caller, &selector))
                .transpose()?;
            let result = api.get_sidebar(caller, parent)?;
            render::render_list(&result, "No documents here.", mode)
        }
        Commands::Tree => render::render_tree(&api.get_tree(caller)?, mode),
        Commands::Search { term } => {
            let term = term.join(" ");
            let result = api.get_search(caller, Some(term.as_str()))?;
            render::render_list(&result, "No matching documents.", mode)
        }
        Commands::View { id } => {
            let id = api.resolve(caller, &id)?;
            render::render_document(&api.get_by_id(caller, &id)?, mode)
        }
        Commands::Preview { id } => {
            let id = api.resolve_public(caller, &id)?;
            render::render_document(&api.get_published_by_id(&id)?, mode)
        }
        Commands::Update {
            id,
            title,
            content,
            icon,
            cover,
        } => {
            let id = api.resolve(caller, &id)?;
            let update = DocumentUpdate {
                title,
                content,
                icon,
                cover_image: cover,
                is_published: None,
            };
            render::render_mutation(&api.update_document(caller, &id, update)?, mode)
        }
        Commands::Publish { id } => {
            let id = api.resolve(caller, &id)?;
            let result = api.update_document(caller, &id, DocumentUpdate::published(true))?;
            render::render_mutation(&result, mode)
        }
        Commands::Unpublish { id } => {
            let id = api.resolve(caller, &id)?;
            let result = api.update_document(caller, &id, DocumentUpdate::published(false))?;
            render::render_mutation(&result, mode)
        }
        Commands::RemoveIcon { id } => {
            let id = api.resolve(caller, &id)?;
            render::render_mutation(&api.remove_icon(caller, &id)?, mode)
        }
        Commands::RemoveCover { id } => {
            let id = api.resolve(caller, &id)?;
            render::render_mutation(&api.remove_cover_image(caller, &id)?, mode)
        }
        Commands::Archive { id } => {
            let id = api.resolve(caller, &id)?;
            render::render_mutation(&api.archive_document(caller, &id)?, mode)
        }
        Commands::Restore { id } => {
            let id = api.resolve(caller, &id)?;
            render::render_mutation(&api.restore_document(caller, &id)?, mode)
        }
        Commands::Remove { id, recursive } => {
            let id = api.resolve(caller, &id)?;
            render::render_mutation(&api.remove_document(caller, &id, recursive)?, mode)
        }
        Commands::Trash { search } => {
            let result = api.get_trash(caller, search.as_deref())?;
            render::render_list(&result, "Trash is empty.", mode)
        }
    };
    Ok(output)
}
