//! Terminal rendering of collection pages.

use anyhow::Result;
use reservista_admin::entities::{Category, DiningTable, ManagedImage, MenuItem, Reservation, User};
use reservista_admin::format::{format_currency, format_timestamp, DATE_FORMAT, DATE_TIME_FORMAT};
use reservista_core::{Record, View};
use serde::Serialize;

/// One-line summary of a record.
pub trait Row: Sized {
    fn row(record: &Record<Self>) -> String;
}

impl Row for User {
    fn row(record: &Record<Self>) -> String {
        format!("{:<8} {:<22} {:<24} {}", record.id(), record.name, record.email, record.role)
    }
}

impl Row for DiningTable {
    fn row(record: &Record<Self>) -> String {
        format!(
            "{:<8} {:<18} seats {:<3} {}",
            record.id(),
            record.name,
            record.capacity,
            record.status
        )
    }
}

impl Row for Reservation {
    fn row(record: &Record<Self>) -> String {
        format!(
            "{:<8} {:<16} {:<10} {:<16} {:<26} {:>2} guests  {}",
            record.id(),
            record.customer_name,
            record.customer_phone,
            record.table_name,
            format_timestamp(record.date_time, DATE_TIME_FORMAT),
            record.guests,
            record.status
        )
    }
}

impl Row for MenuItem {
    fn row(record: &Record<Self>) -> String {
        format!(
            "{:<8} {:<22} {:>9} {:<12} {}",
            record.id(),
            record.name,
            format_currency(record.price),
            record.category_name,
            record.tags.join(", ")
        )
    }
}

impl Row for Category {
    fn row(record: &Record<Self>) -> String {
        format!(
            "{:<8} {:<14} {}",
            record.id(),
            record.name,
            record.description.as_deref().unwrap_or("")
        )
    }
}

impl Row for ManagedImage {
    fn row(record: &Record<Self>) -> String {
        format!(
            "{:<8} {:<16} {:<28} uploaded {}",
            record.id(),
            record.filename.as_deref().unwrap_or("-"),
            record.alt_text.as_deref().unwrap_or("-"),
            format_timestamp(record.created_at(), DATE_FORMAT)
        )
    }
}

/// Prints a page with its pagination footer, or as JSON.
pub fn print_view<T: Row + Serialize>(view: &View<T>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if view.is_collection_empty() {
        println!("No records yet.");
        return Ok(());
    }
    if view.items.is_empty() {
        println!("No records match \"{}\".", view.search_term);
    }
    for record in &view.items {
        println!("{}", T::row(record));
    }

    let window = view.window();
    println!(
        "Showing {} to {} of {} (page {} of {})",
        window.start_item,
        window.end_item,
        view.total_filtered_count,
        view.current_page,
        view.total_pages.max(1)
    );
    Ok(())
}
