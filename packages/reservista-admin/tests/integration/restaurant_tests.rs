use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use reservista_admin::entities::{Category, MenuItem, Role, User, UserUpdate};
use reservista_admin::{AdminError, DashboardSummary, Restaurant, RestaurantConfig};
use reservista_core::{IdStrategy, NoLatency};

fn restaurant() -> Restaurant<NoLatency> {
    Restaurant::seeded(RestaurantConfig::default(), NoLatency).expect("seed data is valid")
}

#[tokio::test]
async fn test_users_page_and_search() -> Result<()> {
    let restaurant = restaurant();
    let users = restaurant.users();

    let view = users.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.items[0].name, "Edward Scissorhands");

    users.set_search_term("ADMIN");
    let view = users.view();
    let names: Vec<_> = view.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Diana Prince", "Alice Wonderland"]);
    assert_eq!(view.original_count, 5);

    let mut user = User::new("Frank Ocean", "frank@example.com", Role::Staff);
    user.password = Some("secret-pass".to_string());
    let added = restaurant.add_user(user).await?;
    assert_eq!(users.view().total_filtered_count, 2);

    users.set_search_term("secret");
    assert!(users.view().is_filtered_empty());

    users.set_search_term("");
    assert_eq!(users.view().total_pages, 2);
    assert_eq!(users.view().items[0].id(), added.id());
    Ok(())
}

#[tokio::test]
async fn test_invalid_update_leaves_record() -> Result<()> {
    let restaurant = restaurant();
    let result = restaurant
        .update_user(
            "1",
            UserUpdate {
                name: Some("A".to_string()),
                password: Some("123".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AdminError::Validation(errors)) => {
            assert_eq!(errors.errors().len(), 2);
            assert_eq!(
                errors.message_for("password"),
                Some("Password must be at least 6 characters.")
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    let alice = restaurant.users().get_by_id("1").expect("seeded user");
    assert_eq!(alice.name, "Alice Wonderland");
    Ok(())
}

#[tokio::test]
async fn test_menu_search_by_tag_and_category() -> Result<()> {
    let restaurant = restaurant();
    let dessert = restaurant.add_category(Category::new("Gelato", None)).await?;
    restaurant
        .add_menu_item(
            MenuItem::new("Pistachio Gelato", "Creamy Sicilian pistachio ice cream", 6.0, dessert.id().as_str())
                .with_tags("dessert, frozen"),
        )
        .await?;

    let menu = restaurant.menu_items();
    menu.set_search_term("frozen");
    let view = menu.view();
    assert_eq!(view.total_filtered_count, 1);
    assert_eq!(view.items[0].category_name, "Gelato");

    menu.set_search_term("gelato");
    assert_eq!(menu.view().total_filtered_count, 1);

    let blocked = restaurant.delete_category(dessert.id().as_str()).await;
    assert!(matches!(blocked, Err(AdminError::CategoryInUse { menu_items: 1, .. })));
    Ok(())
}

#[tokio::test]
async fn test_sequential_ids_do_not_collide_with_seed() -> Result<()> {
    let config = RestaurantConfig {
        id_strategy: IdStrategy::Sequential,
        ..Default::default()
    };
    let restaurant = Restaurant::seeded(config, NoLatency)?;
    let added = restaurant
        .add_user(User::new("Grace Hopper", "grace@example.com", Role::Admin))
        .await?;
    assert_eq!(added.id().as_str(), "6");
    assert_eq!(restaurant.users().len(), 6);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_reads_while_mutating() -> Result<()> {
    let restaurant = Arc::new(Restaurant::new(RestaurantConfig::default())?);
    let today = NaiveDate::from_ymd_opt(2024, 7, 20).expect("valid date");

    let writer = {
        let restaurant = Arc::clone(&restaurant);
        tokio::spawn(async move { restaurant.delete_menu_item("m1").await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(restaurant.is_loading());
    assert_eq!(DashboardSummary::collect(restaurant.as_ref(), today).total_menu_items, 3);

    writer.await?;
    assert!(!restaurant.is_loading());
    let summary = DashboardSummary::collect(restaurant.as_ref(), today);
    assert_eq!(summary.total_menu_items, 2);
    assert_eq!(summary.todays_reservations, 1);
    Ok(())
}
