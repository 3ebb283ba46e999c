//! Restaurant entities managed by the dashboard.
//!
//! Each entity has a field struct stored in a collection and an `…Update`
//! patch whose `None` fields leave the stored value untouched.

mod image;
mod menu;
mod reservation;
mod table;
mod user;

pub use image::{ManagedImage, ManagedImageUpdate};
pub use menu::{parse_tags, Category, CategoryUpdate, MenuItem, MenuItemUpdate};
pub use reservation::{Reservation, ReservationStatus, ReservationUpdate};
pub use table::{DiningTable, DiningTableUpdate, TableStatus};
pub use user::{Role, User, UserUpdate};

/// Replaces `target` when the patch carries a value.
pub(crate) fn patch_field<V>(target: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *target = value;
    }
}
