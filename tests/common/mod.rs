#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;

use lingo_backend::config::Config;
use lingo_backend::routes;
use lingo_backend::service::{TranslateRequest, TranslationService};
use lingo_backend::state::AppState;
use lingo_backend::store::TranslationStore;
use lingo_backend::translator::{TranslatorError, TranslatorInterface};

/// Deterministic stand-in for the remote provider: echoes the input tagged
/// with the target language, or fails every call when `fail` is set.
pub struct FakeTranslator {
    pub fail: bool,
}

#[async_trait]
impl TranslatorInterface for FakeTranslator {
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslatorError>
    {
        if self.fail {
            return Err(TranslatorError::Rejected {
                status: 503,
                detail: "backend unavailable".to_string(),
            });
        }
        Ok(format!("{} [{}]", text, target_language))
    }
}

pub fn service_with(fail: bool) -> (Arc<TranslationStore>, TranslationService) {
    let store = Arc::new(TranslationStore::new());
    let translator = Arc::new(FakeTranslator { fail });
    let service = TranslationService::new(translator, store.clone());
    (store, service)
}

/// Router wired to a fake provider, for boundary tests.
pub fn app_with(fail: bool) -> (Arc<TranslationStore>, Router) {
    let store = Arc::new(TranslationStore::new());
    let translator = Arc::new(FakeTranslator { fail });
    let service = Arc::new(TranslationService::new(translator, store.clone()));

    let state = AppState {
        config: Config::default(),
        store: store.clone(),
        service,
    };

    let app = Router::new()
        .merge(routes::create_routes())
        .with_state(state);

    (store, app)
}

pub fn request(text: &str, target_language: &str) -> TranslateRequest {
    TranslateRequest {
        text: text.to_string(),
        target_language: target_language.to_string(),
    }
}
