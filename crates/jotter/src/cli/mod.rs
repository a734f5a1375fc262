//! # CLI Behavior
//!
//! This is **one possible UI client** for jotter, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`jotter`)
//!
//! Running `jotter` with no arguments lists the top level of the tree, like
//! `jotter list`.
//!
//! ## Addressing Documents
//!
//! Every command that takes an `ID` accepts a full id or a unique prefix of it
//! (at least 4 characters), as printed in the first column of `list`, `tree`,
//! `search` and `trash`. Prefixes match among the current user's documents,
//! so `preview` run without a user needs the full id.
//!
//! ## Who Am I
//!
//! The caller is `--user`, else `user` from the config (or `JOTTER_USER`).
//! Without one, every command except `preview` fails with `Unauthorized`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging and dispatch to the API
//! - `render`: Output formatting (rows, trees, messages, JSON)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
