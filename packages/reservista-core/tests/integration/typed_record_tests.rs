//! Typed record workflow: a domain struct with an `Option`-field patch.

use chrono::{TimeZone, Utc};
use ntest::timeout;
use serde::Serialize;

use reservista_core::{CollectionConfig, CollectionManager, Fields, NoLatency, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Dish {
    title: String,
    price: f64,
    #[serde(skip_serializing)]
    secret_recipe: String,
}

#[derive(Debug, Default)]
struct DishUpdate {
    title: Option<String>,
    price: Option<f64>,
}

impl Fields for Dish {
    type Patch = DishUpdate;

    fn merge(&mut self, patch: DishUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

fn dish(title: &str, price: f64) -> Dish {
    Dish {
        title: title.to_string(),
        price,
        secret_recipe: "garlic".to_string(),
    }
}

fn menu() -> CollectionManager<Dish, NoLatency> {
    let initial = vec![
        Record::new("m1", Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(), dish("Spaghetti Carbonara", 15.99)),
        Record::new("m2", Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap(), dish("Margherita Pizza", 12.5)),
        Record::new("m3", Utc.with_ymd_and_hms(2024, 7, 3, 0, 0, 0).unwrap(), dish("Caesar Salad", 9.75)),
    ];
    CollectionManager::with_latency(initial, CollectionConfig::named("menu", 2), NoLatency).unwrap()
}

#[tokio::test]
async fn test_typed_full_lifecycle() {
    let menu = menu();

    let created = menu.add(dish("Tiramisu", 6.0)).await;
    assert_eq!(menu.len(), 4);
    assert_eq!(menu.view().items[0].id(), created.id());
    assert_eq!(menu.view().total_pages, 2);

    let updated = menu
        .update(
            created.id().as_str(),
            DishUpdate {
                price: Some(7.25),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Tiramisu");
    assert_eq!(updated.price, 7.25);
    assert_eq!(updated.created_at(), created.created_at());

    menu.delete(created.id().as_str()).await;
    assert!(menu.get_by_id(created.id().as_str()).is_none());
    assert_eq!(menu.len(), 3);
}

#[timeout(1000)]
#[test]
fn test_skipped_fields_are_not_searchable() {
    let menu = menu();
    menu.set_search_term("garlic");
    let view = menu.view();
    assert!(view.items.is_empty());
    assert!(view.is_filtered_empty());
}

#[timeout(1000)]
#[test]
fn test_numeric_fields_are_searchable() {
    let menu = menu();
    menu.set_search_term("9.75");
    let view = menu.view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].title, "Caesar Salad");
}

#[timeout(1000)]
#[test]
fn test_view_serializes_for_presentation() {
    let menu = menu();
    let value = serde_json::to_value(menu.view()).unwrap();
    assert_eq!(value["currentPage"], 1);
    assert_eq!(value["totalPages"], 2);
    assert_eq!(value["originalCount"], 3);
    assert_eq!(value["items"][0]["id"], "m3");
    assert_eq!(value["items"][0]["title"], "Caesar Salad");
    assert!(value["items"][0].get("secret_recipe").is_none());
}
