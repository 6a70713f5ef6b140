use std::sync::Arc;

use crate::config::Config;
use crate::service::TranslationService;
use crate::store::TranslationStore;
use crate::translator::TranslatorFactory;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<TranslationStore>,
    pub service: Arc<TranslationService>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create_translator(&config.provider_config);
        let store = Arc::new(TranslationStore::new());
        let service = Arc::new(TranslationService::new(translator, store.clone()));

        Ok(Self {
            config,
            store,
            service,
        })
    }
}
