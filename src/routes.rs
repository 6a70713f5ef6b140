use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
    Json,
    http::StatusCode,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::error;

use crate::error::ServiceError;
use crate::service::{TranslateRequest, DEFAULT_HISTORY_LIMIT};
use crate::state::AppState;
use crate::store::TranslationRecord;

/// Target languages offered to clients.
const LANGUAGE_OPTIONS: &[(&str, &str)] = &[
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
];

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/translate", post(translate_text))
        .route("/api/translations/recent", get(recent_translations))
        .route("/api/languages", get(language_options))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslationRecord>, (StatusCode, Json<Value>)> {
    match state.service.translate(payload).await {
        Ok(record) => Ok(Json(record)),
        Err(err) => Err(error_response(err)),
    }
}

async fn recent_translations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<TranslationRecord>> {
    // Absent or unparsable limit falls back to the default
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    Json(state.service.recent_history(limit).await)
}

async fn language_options() -> Json<Value> {
    let languages: Vec<Value> = LANGUAGE_OPTIONS
        .iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();

    Json(json!(languages))
}

/// Map a service error onto an HTTP outcome. Provider and internal detail
/// stays in the logs; callers get a generic message.
fn error_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    match err {
        ServiceError::Validation { message, .. } => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": message })),
        ),
        ServiceError::Provider(cause) => {
            error!("Translation provider error: {}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to translate text. Please try again later." })),
            )
        }
        ServiceError::Internal(cause) => {
            error!("Unexpected internal error: {:#}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "An unexpected error occurred" })),
            )
        }
    }
}
