use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::ProviderConfig;
use super::client::GoogleTranslateClient;
use super::interface::TranslatorInterface;

/// Factory for creating translation provider clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator client based on configuration
    ///
    /// # Arguments
    /// * `provider_config` - Provider settings (endpoint, key, timeout)
    ///
    /// # Returns
    /// Boxed TranslatorInterface implementation
    pub fn create_translator(provider_config: &ProviderConfig) -> Arc<dyn TranslatorInterface> {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_TRANSLATE_API_KEY").ok());

        if api_key.is_none() {
            // Not fatal: the client reports the missing key on first use
            warn!("No translation API key configured; translate requests will fail");
        }

        info!("Initializing translation provider: {}", provider_config.api_url);

        let client = GoogleTranslateClient::new(
            provider_config.api_url.clone(),
            api_key,
            Duration::from_secs(provider_config.timeout_secs),
        );

        Arc::new(client)
    }
}
