//! Managers shared between tasks: readers observe consistent snapshots
//! while mutations queue behind each other.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Map, Value};

use reservista_core::{CollectionConfig, CollectionManager, IdStrategy};

fn row(title: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("title".to_string(), json!(title));
    fields
}

#[tokio::test(start_paused = true)]
async fn test_spawned_mutations_are_serialized() {
    let config = CollectionConfig {
        id_strategy: IdStrategy::Sequential,
        mutation_delay_ms: 300,
        ..CollectionConfig::named("tables", 5)
    };
    let manager = Arc::new(CollectionManager::new(Vec::new(), config).unwrap());

    let mut handles = Vec::new();
    for i in 0..10 {
        let manager = Arc::clone(&manager);
        handles.push(tokio::spawn(async move {
            manager.add(row(&format!("Table {}", i))).await
        }));
        tokio::task::yield_now().await;
    }

    let start = tokio::time::Instant::now();
    for handle in handles {
        handle.await.unwrap();
    }

    // One delay per mutation, never overlapping
    assert!(start.elapsed() >= Duration::from_millis(2700));
    assert_eq!(manager.len(), 10);
    assert!(!manager.is_loading());

    let view = manager.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.items.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_search_and_paging_while_mutation_pending() {
    let manager = Arc::new(
        CollectionManager::new(vec![], CollectionConfig::named("users", 5)).unwrap(),
    );
    manager.add(row("Alice Wonderland")).await;
    manager.add(row("Bob The Builder")).await;

    let writer = {
        let manager = Arc::clone(&manager);
        tokio::spawn(async move { manager.add(row("Charlie Chaplin")).await })
    };
    tokio::task::yield_now().await;

    assert!(manager.is_loading());
    manager.set_search_term("bob");
    let view = manager.view();
    assert_eq!(view.items.len(), 1);
    assert!(view.is_loading);

    writer.await.unwrap();
    manager.set_search_term("");
    let view = manager.view();
    assert_eq!(view.original_count, 3);
    assert!(!view.is_loading);
    assert_eq!(view.items[0]["title"], "Charlie Chaplin");
}
