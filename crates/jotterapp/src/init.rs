//! # Context Setup
//!
//! Clients do not assemble stores and policies themselves. [`initialize`] turns a
//! handful of overrides into a ready [`JotterContext`]:
//!
//! 1. **Config file**: the explicit path if given, else `jotter.toml` in the OS
//!    config directory (via the `directories` crate). A missing file is fine.
//! 2. **Configuration**: [`JotterConfig::load`] layers environment over file over
//!    defaults.
//! 3. **Data directory**: explicit override, else `data_dir` from config, else
//!    the OS data directory.
//! 4. **Identity**: explicit user, else `user` from config, else anonymous.
//!
//! The store is opened lazily: nothing touches the disk until the first
//! operation, and the directory is only created by the first write.

use crate::api::JotterApi;
use crate::config::JotterConfig;
use crate::error::{JotterError, Result};
use crate::identity::{IdentityProvider, StaticIdentity};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "jotter.toml";

pub struct JotterContext {
    pub api: JotterApi<FileStore>,
    pub config: JotterConfig,
    pub identity: StaticIdentity,
    pub data_dir: PathBuf,
}

/// Values that take precedence over configuration, typically CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub user: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "jotter")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn initialize(overrides: Overrides) -> Result<JotterContext> {
    let config_file = overrides.config_file.or_else(default_config_path);
    let config = JotterConfig::load(config_file.as_deref())?;

    let data_dir = overrides
        .data_dir
        .or_else(|| config.data_dir.clone())
        .or_else(default_data_dir)
        .ok_or_else(|| {
            JotterError::Config(
                "could not determine a data directory; set JOTTER_DATA_DIR or --data-dir"
                    .to_string(),
            )
        })?;

    let user = overrides.user.or_else(|| config.user.clone());
    let identity = StaticIdentity::new(user.as_deref());

    tracing::debug!(
        data_dir = %data_dir.display(),
        config = ?config_file,
        disclosure = %config.disclosure(),
        authenticated = identity.identity().is_some(),
        "initialized context"
    );

    let api = JotterApi::new(FileStore::new(data_dir.clone()), config.disclosure());
    Ok(JotterContext {
        api,
        config,
        identity,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorDisclosure;
    use std::fs;

    #[test]
    fn test_overrides_win_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "user = \"from-file\"\ndisclosure = \"reveal\"\n",
        )
        .unwrap();
        let data_dir = dir.path().join("data");

        let ctx = initialize(Overrides {
            config_file: Some(config_path),
            data_dir: Some(data_dir.clone()),
            user: Some("from-flag".into()),
        })
        .unwrap();

        assert_eq!(ctx.data_dir, data_dir);
        assert_eq!(ctx.api.store().root(), data_dir.as_path());
        assert_eq!(ctx.identity.identity().unwrap().subject(), "from-flag");
        if std::env::var_os("JOTTER_DISCLOSURE").is_none() {
            assert_eq!(ctx.api.disclosure(), ErrorDisclosure::Reveal);
        }
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_user_falls_back_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "user = \"alice\"\n").unwrap();

        let ctx = initialize(Overrides {
            config_file: Some(config_path),
            data_dir: Some(dir.path().to_path_buf()),
            user: None,
        })
        .unwrap();

        if std::env::var_os("JOTTER_USER").is_none() {
            assert_eq!(ctx.identity.identity().unwrap().subject(), "alice");
        }
    }
}
