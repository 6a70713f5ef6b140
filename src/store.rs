use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A persisted translation outcome.
///
/// Records are immutable once created: the store never updates or deletes
/// them, and `id`/`created_at` are assigned exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: u64,
    pub source_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory store of translation records.
///
/// Owns the record collection and the identifier counter. Identifier
/// assignment and insertion happen under one write-lock acquisition, so
/// concurrent creates never duplicate ids or lose inserts.
pub struct TranslationStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    records: Vec<TranslationRecord>,
    next_id: u64,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store a completed translation and return the created record.
    ///
    /// Ids are strictly increasing from 1; `created_at` is stamped inside
    /// the lock so the (timestamp, id) pair orders consistently.
    pub async fn create(
        &self,
        source_text: &str,
        translated_text: &str,
        target_language: &str,
    ) -> TranslationRecord {
        let mut inner = self.inner.write().await;
        let record = TranslationRecord {
            id: inner.next_id,
            source_text: source_text.to_string(),
            translated_text: translated_text.to_string(),
            target_language: target_language.to_string(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        record
    }

    /// Return up to `limit` records, most recent first.
    ///
    /// Ordering is by `created_at` descending with ties broken by
    /// descending id, so the result is totally ordered even when timestamp
    /// resolution collides. A non-positive `limit` yields an empty vec; a
    /// `limit` past the store size yields everything.
    pub async fn recent(&self, limit: i64) -> Vec<TranslationRecord> {
        if limit <= 0 {
            return Vec::new();
        }

        let inner = self.inner.read().await;
        let mut records = inner.records.clone();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        records.truncate(limit as usize);
        records
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}
