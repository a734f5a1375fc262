use crate::model::DocumentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl JotterError {
    /// Folds `NotFound` into `Unauthorized` so callers cannot probe for ids
    /// they do not own. Every other error passes through untouched.
    pub fn conceal(self) -> Self {
        match self {
            JotterError::NotFound(_) => JotterError::Unauthorized,
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, JotterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn conceal_folds_not_found() {
        let err = JotterError::NotFound(Uuid::new_v4()).conceal();
        assert!(matches!(err, JotterError::Unauthorized));
    }

    #[test]
    fn conceal_keeps_other_kinds() {
        let err = JotterError::InvalidState("nope".into()).conceal();
        assert!(matches!(err, JotterError::InvalidState(msg) if msg == "nope"));
    }
}
