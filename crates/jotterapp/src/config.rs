//! # Configuration
//!
//! Jotter configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `JOTTER_USER`, `JOTTER_DATA_DIR`,
//!    `JOTTER_DISCLOSURE`, `JOTTER_LOG`.
//! 2. **Config file**: `jotter.toml` in the OS config directory (via the
//!    `directories` crate, see [`crate::init`]), or an explicit path.
//! 3. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `user` | none | Subject used as the caller identity |
//! | `data_dir` | OS data dir | Where `documents.json` lives |
//! | `disclosure` | `conceal` | Whether "not found" is reported as such or folded into "unauthorized" |
//! | `log_filter` | `warn` | `tracing` filter used when `RUST_LOG` is unset |

use crate::error::{JotterError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How owner-checked operations report a missing document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisclosure {
    /// Report missing documents as `Unauthorized`, indistinguishable from
    /// documents owned by someone else.
    #[default]
    Conceal,
    /// Report missing documents as `NotFound`.
    Reveal,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown disclosure mode \"{0}\" (expected \"conceal\" or \"reveal\")")]
pub struct ParseDisclosureError(String);

impl FromStr for ErrorDisclosure {
    type Err = ParseDisclosureError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conceal" => Ok(Self::Conceal),
            "reveal" => Ok(Self::Reveal),
            other => Err(ParseDisclosureError(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorDisclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conceal => f.write_str("conceal"),
            Self::Reveal => f.write_str("reveal"),
        }
    }
}

fn parse_disclosure(s: &str) -> std::result::Result<ErrorDisclosure, ParseDisclosureError> {
    s.parse()
}

/// Configuration for jotter, stored in `jotter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JotterConfig {
    /// Subject used as the caller identity when no `--user` flag is given.
    #[config(env = "JOTTER_USER")]
    pub user: Option<String>,

    /// Directory holding the document table.
    #[config(env = "JOTTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// "conceal" (default) or "reveal".
    #[config(env = "JOTTER_DISCLOSURE", parse_env = parse_disclosure)]
    pub disclosure: Option<ErrorDisclosure>,

    /// Log filter used when `RUST_LOG` is not set.
    #[config(env = "JOTTER_LOG", default = "warn")]
    pub log_filter: String,
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            user: None,
            data_dir: None,
            disclosure: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl JotterConfig {
    /// Loads environment overrides on top of `file` (when it exists) on top of
    /// the compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| JotterError::Config(e.to_string()))
    }

    pub fn disclosure(&self) -> ErrorDisclosure {
        self.disclosure.unwrap_or_default()
    }
}
