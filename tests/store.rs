use std::sync::Arc;

use lingo_backend::store::TranslationStore;

#[tokio::test]
async fn create_assigns_increasing_ids_from_one() {
    let store = TranslationStore::new();

    let first = store.create("Hello", "Hola", "es").await;
    let second = store.create("Bye", "Au revoir", "fr").await;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(second.created_at >= first.created_at);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn create_returns_the_stored_record() {
    let store = TranslationStore::new();

    let record = store.create("Hello", "Hola", "es").await;

    assert_eq!(record.source_text, "Hello");
    assert_eq!(record.translated_text, "Hola");
    assert_eq!(record.target_language, "es");

    let fetched = store.recent(1).await;
    assert_eq!(fetched[0].id, record.id);
    assert_eq!(fetched[0].created_at, record.created_at);
}

#[tokio::test]
async fn recent_returns_most_recent_first() {
    let store = TranslationStore::new();

    store.create("Hello", "Hola", "es").await;
    store.create("Bye", "Au revoir", "fr").await;
    store.create("Thanks", "Danke", "de").await;

    let records = store.recent(10).await;
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();

    // Equal timestamps fall back to descending id, so the order is total
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn recent_respects_the_limit() {
    let store = TranslationStore::new();

    for i in 0..5 {
        store.create(&format!("text {}", i), "translated", "es").await;
    }

    assert_eq!(store.recent(3).await.len(), 3);
    assert_eq!(store.recent(5).await.len(), 5);
    // A limit past the store size yields everything
    assert_eq!(store.recent(100).await.len(), 5);
}

#[tokio::test]
async fn recent_with_non_positive_limit_is_empty() {
    let store = TranslationStore::new();
    store.create("Hello", "Hola", "es").await;

    assert!(store.recent(0).await.is_empty());
    assert!(store.recent(-1).await.is_empty());
}

#[tokio::test]
async fn recent_on_empty_store_is_empty() {
    let store = TranslationStore::new();
    assert!(store.recent(10).await.is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn recent_is_idempotent_between_creates() {
    let store = TranslationStore::new();
    store.create("Hello", "Hola", "es").await;
    store.create("Bye", "Adios", "es").await;

    let first = store.recent(10).await;
    let second = store.recent(10).await;

    let first_ids: Vec<u64> = first.iter().map(|r| r.id).collect();
    let second_ids: Vec<u64> = second.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_assign_distinct_contiguous_ids() {
    let store = Arc::new(TranslationStore::new());

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create(&format!("text {}", i), "translated", "es")
                .await
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("create task panicked"));
    }

    assert_eq!(store.len().await, 50);

    ids.sort_unstable();
    let expected: Vec<u64> = (1..=50).collect();
    assert_eq!(ids, expected, "ids must be distinct and contiguous");
}
