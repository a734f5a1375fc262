//! Caller identity.
//!
//! Every operation receives the caller explicitly as `Option<&Identity>`;
//! `None` means the request is unauthenticated. How a client obtains the
//! identity is behind [`IdentityProvider`]: the CLI uses [`StaticIdentity`]
//! built from its `--user` flag or configuration.

use crate::error::{JotterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, opaque subject of the calling user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    subject: String,
}

impl Identity {
    /// Returns `None` for an empty or whitespace-only subject.
    pub fn new(subject: impl Into<String>) -> Option<Self> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return None;
        }
        Some(Self { subject })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.subject)
    }
}

pub trait IdentityProvider {
    fn identity(&self) -> Option<Identity>;
}

/// Provider that always answers with the same (possibly absent) identity.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(Option<Identity>);

impl StaticIdentity {
    pub fn new(subject: Option<&str>) -> Self {
        Self(subject.and_then(Identity::new))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}

/// Resolves the caller or fails with `Unauthorized`.
pub fn require(caller: Option<&Identity>) -> Result<&Identity> {
    caller.ok_or(JotterError::Unauthorized)
}
