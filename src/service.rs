use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::store::{TranslationRecord, TranslationStore};
use crate::translator::TranslatorInterface;

/// Default number of records returned by the history endpoint.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Incoming translation request as posted by clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
}

/// Orchestrates validation, provider invocation and persistence.
///
/// A record lands in the store if and only if validation and the provider
/// call both succeeded; failed requests leave the store untouched.
pub struct TranslationService {
    translator: Arc<dyn TranslatorInterface>,
    store: Arc<TranslationStore>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn TranslatorInterface>, store: Arc<TranslationStore>) -> Self {
        Self { translator, store }
    }

    /// Validate the request, translate via the provider, persist the result.
    pub async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslationRecord, ServiceError> {
        Self::validate(&request)?;

        let translated_text = self
            .translator
            .translate(&request.text, &request.target_language)
            .await?;

        let record = self
            .store
            .create(&request.text, &translated_text, &request.target_language)
            .await;

        info!(
            "Stored translation {} ({} -> {} chars, target={})",
            record.id,
            record.source_text.len(),
            record.translated_text.len(),
            record.target_language
        );

        Ok(record)
    }

    /// Most recent translations, newest first. Never fails; an empty store
    /// yields an empty vec.
    pub async fn recent_history(&self, limit: i64) -> Vec<TranslationRecord> {
        self.store.recent(limit).await
    }

    fn validate(request: &TranslateRequest) -> Result<(), ServiceError> {
        if request.text.is_empty() {
            debug!("Rejected translate request: empty text");
            return Err(ServiceError::validation("text", "Text is required"));
        }
        if request.target_language.chars().count() < 2 {
            debug!(
                "Rejected translate request: bad language code {:?}",
                request.target_language
            );
            return Err(ServiceError::validation(
                "targetLanguage",
                "Language code is required",
            ));
        }
        Ok(())
    }
}
