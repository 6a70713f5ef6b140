use thiserror::Error;

use crate::translator::TranslatorError;

/// Error taxonomy surfaced by the translation service.
///
/// The three kinds stay distinguishable so the boundary can decide
/// whether the caller should fix its input (`Validation`), retry later
/// (`Provider`), or alert an operator (`Internal`).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input is malformed. Carries the first violated field.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The remote translation provider failed. Nothing was persisted.
    #[error("translation provider failure: {0}")]
    Provider(#[from] TranslatorError),

    /// Unexpected failure; treated as a defect to investigate.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
