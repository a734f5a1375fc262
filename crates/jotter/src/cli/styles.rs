//! Terminal styles for the jotter CLI.
//!
//! Renderers never build `console::Style` values inline: they pick one of the
//! semantic styles below, so the look of a kind of information (an id, a time,
//! a trashed title) stays the same everywhere. `console` drops the escape codes
//! on its own when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static REGULAR: Lazy<Style> = Lazy::new(Style::new);
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(244));
pub static FAINT: Lazy<Style> = Lazy::new(|| Style::new().color256(249));
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(244).italic());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().color256(136));
pub static ARCHIVED: Lazy<Style> = Lazy::new(|| Style::new().color256(124));
pub static PUBLISHED: Lazy<Style> = Lazy::new(|| Style::new().cyan());

pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().color256(244));
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
