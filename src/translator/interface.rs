use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of the remote translation provider.
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// No API key was configured; reported on first use rather than at
    /// startup so the rest of the service stays available.
    #[error("translation provider API key is not configured")]
    MissingApiKey,

    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("translation provider rejected the request ({status}): {detail}")]
    Rejected {
        status: u16,
        detail: String,
    },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Translation provider interface - concrete implementation calls the
/// remote translation API.
///
/// Implementations perform no business validation of their own; the
/// service layer validates before invoking. The call may block on network
/// I/O and fail transiently.
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` into the language named by `target_language`.
    ///
    /// # Arguments
    /// * `text` - The source text to translate
    /// * `target_language` - Target language code (e.g. "es", "fr")
    ///
    /// # Returns
    /// The translated text
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslatorError>;
}
