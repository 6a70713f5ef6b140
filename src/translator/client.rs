use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::interface::{TranslatorError, TranslatorInterface};

/// Client for the Google Cloud Translation v2 REST API.
pub struct GoogleTranslateClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseBody {
    data: TranslationsData,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    translations: Vec<TranslationItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationItem {
    translated_text: String,
}

impl GoogleTranslateClient {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl TranslatorInterface for GoogleTranslateClient {
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslatorError>
    {
        let api_key = self.api_key.as_deref().ok_or(TranslatorError::MissingApiKey)?;

        let body = TranslateRequestBody {
            q: text,
            target: target_language,
            format: "text",
        };

        debug!("Sending translate request: target={}, chars={}", target_language, text.len());

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Provider rejected translate request: status={}", status);
            return Err(TranslatorError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: TranslateResponseBody = response
            .json()
            .await
            .map_err(|e| TranslatorError::MalformedResponse(e.to_string()))?;

        let translation = parsed
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| {
                TranslatorError::MalformedResponse("no translations in response".to_string())
            })?;

        debug!("Translate request succeeded: target={}", target_language);
        Ok(translation.translated_text)
    }
}
