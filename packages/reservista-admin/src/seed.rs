//! Mock data the dashboard starts with.

use chrono::{DateTime, TimeZone, Utc};
use reservista_core::Record;

use crate::entities::{
    Category, DiningTable, ManagedImage, MenuItem, Reservation, ReservationStatus, Role, TableStatus,
    User,
};

/// Initial records for every collection.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<Record<User>>,
    pub tables: Vec<Record<DiningTable>>,
    pub reservations: Vec<Record<Reservation>>,
    pub menu_items: Vec<Record<MenuItem>>,
    pub categories: Vec<Record<Category>>,
    pub images: Vec<Record<ManagedImage>>,
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 0, 0)
}

impl SeedData {
    /// Builds the demo data set. Menu items and categories are stamped `now`.
    pub fn mock(now: DateTime<Utc>) -> Self {
        let users = vec![
            Record::new("1", on(2023, 1, 15), User::new("Alice Wonderland", "alice@example.com", Role::Admin)),
            Record::new("2", on(2023, 2, 20), User::new("Bob The Builder", "bob@example.com", Role::Staff)),
            Record::new("3", on(2023, 3, 10), User::new("Charlie Chaplin", "charlie@example.com", Role::Staff)),
            Record::new("4", on(2023, 4, 5), User::new("Diana Prince", "diana@example.com", Role::Admin)),
            Record::new("5", on(2023, 5, 12), User::new("Edward Scissorhands", "edward@example.com", Role::Staff)),
        ];

        let tables = vec![
            Record::new("t1", on(2023, 1, 10), DiningTable::new("Table 1", 4, TableStatus::Available)),
            Record::new("t2", on(2023, 1, 11), DiningTable::new("Table 2", 2, TableStatus::Occupied)),
            Record::new("t3", on(2023, 1, 12), DiningTable::new("Bar Seat 1", 1, TableStatus::Reserved)),
            Record::new("t4", on(2023, 2, 5), DiningTable::new("Table 3 - Patio", 6, TableStatus::Available)),
            Record::new("t5", on(2023, 2, 15), DiningTable::new("VIP Booth", 8, TableStatus::Maintenance)),
        ];

        let reservation = |customer: &str, phone: &str, table_id: &str, table_name: &str, when, guests, status| {
            let mut reservation = Reservation::new(customer, phone, table_id, when, guests, status);
            reservation.table_name = table_name.to_string();
            reservation
        };
        let reservations = vec![
            Record::new(
                "r1",
                on(2024, 7, 1),
                reservation("John Smith", "555-1234", "t1", "Table 1", at(2024, 7, 20, 18, 0), 2, ReservationStatus::Confirmed),
            ),
            Record::new(
                "r2",
                on(2024, 7, 2),
                reservation("Emily Jones", "555-5678", "t2", "Table 2", at(2024, 7, 21, 19, 30), 4, ReservationStatus::Pending),
            ),
            Record::new(
                "r3",
                on(2024, 7, 3),
                reservation("Michael Brown", "555-8765", "t4", "Table 3 - Patio", at(2024, 7, 22, 20, 0), 3, ReservationStatus::Cancelled),
            ),
        ];

        let menu_item = |name: &str, description: &str, price, category_id: &str, category_name: &str, tags: &str| {
            let mut item = MenuItem::new(name, description, price, category_id).with_tags(tags);
            item.category_name = category_name.to_string();
            item.image_url = Some("https://placehold.co/100x100.png".to_string());
            item
        };
        let menu_items = vec![
            Record::new(
                "m1",
                now,
                menu_item(
                    "Spaghetti Carbonara",
                    "Classic Italian pasta with eggs, cheese, pancetta, and pepper.",
                    15.99,
                    "c1",
                    "Pasta",
                    "pasta, italian, classic",
                ),
            ),
            Record::new(
                "m2",
                now,
                menu_item(
                    "Margherita Pizza",
                    "Simple and delicious pizza with tomato, mozzarella, and basil.",
                    12.50,
                    "c2",
                    "Pizza",
                    "pizza, vegetarian",
                ),
            ),
            Record::new(
                "m3",
                now,
                menu_item(
                    "Caesar Salad",
                    "Crisp romaine lettuce with Caesar dressing, croutons, and Parmesan cheese.",
                    9.75,
                    "c3",
                    "Salads",
                    "salad, healthy",
                ),
            ),
        ];

        let categories = vec![
            Record::new("c1", now, Category::new("Pasta", Some("All pasta dishes"))),
            Record::new("c2", now, Category::new("Pizza", Some("Freshly baked pizzas"))),
            Record::new("c3", now, Category::new("Salads", Some("Healthy and fresh salads"))),
            Record::new("c4", now, Category::new("Desserts", Some("Sweet treats"))),
        ];

        let image = |text: &str, alt_text: &str, filename: &str| {
            ManagedImage::new(
                format!("https://placehold.co/600x400.png?text={}", text),
                Some(alt_text),
                Some(filename),
            )
        };
        let images = vec![
            Record::new("img1", on(2023, 6, 10), image("Pasta+Dish", "Delicious pasta dish", "pasta.png")),
            Record::new(
                "img2",
                on(2023, 6, 12),
                image("Restaurant+Interior", "Cozy restaurant interior", "interior.jpg"),
            ),
            Record::new("img3", on(2023, 6, 15), image("Pizza+Slice", "Close-up of a pizza slice", "pizza.png")),
            Record::new("img4", on(2023, 6, 18), image("Salad+Bowl", "Fresh salad bowl", "salad.jpg")),
        ];

        Self {
            users,
            tables,
            reservations,
            menu_items,
            categories,
            images,
        }
    }
}
