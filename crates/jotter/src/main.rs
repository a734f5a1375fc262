//! # Jotter CLI Architecture
//!
//! Jotter ships with a CLI client, but the binary is intentionally thin: the CLI
//! lives in `src/cli/`, while this file only invokes `cli::run()` and handles
//! process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/jotterapp/`: core library with UI-agnostic business logic
//! - `crates/jotter/`: this CLI tool, depends on the `jotterapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/jotter/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, logging, dispatch (commands.rs)          │
//! │  - Terminal and JSON rendering (render.rs, styles.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/jotterapp/src/api.rs)                    │
//! │  - Resolves id prefixes to ids                              │
//! │  - Dispatches to command modules                            │
//! │  - Applies the error disclosure policy                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/jotterapp/src/commands/*)            │
//! │  - Ownership, cascades, ordering                            │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Commands layer**: heavy unit testing of the business logic.
//! - **API layer**: dispatch and error disclosure.
//! - **CLI layer**: clap parsing tests, rendering tests over canned `CmdResult`
//!   values, and end-to-end runs of the binary in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
