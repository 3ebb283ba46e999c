//! Restaurant service: one collection manager per entity, with validation
//! and the cross-collection rules of the dashboard.

use chrono::{NaiveDate, Utc};
use reservista_core::{
    CollectionConfig, CollectionManager, FixedLatency, IdStrategy, Latency, Record, View,
};
use tokio::sync::Mutex;

use crate::entities::{
    Category, CategoryUpdate, DiningTable, DiningTableUpdate, ManagedImage, ManagedImageUpdate,
    MenuItem, MenuItemUpdate, Reservation, ReservationStatus, ReservationUpdate, User, UserUpdate,
};
use crate::error::AdminError;
use crate::seed::SeedData;
use crate::validation::Validate;

/// Shown for reservations whose table no longer exists.
pub const UNKNOWN_TABLE: &str = "Unknown Table";
/// Shown for menu items whose category no longer exists.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Restaurant service configuration.
#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    /// Page size of users, tables, reservations and menu items
    pub page_size: usize,
    /// Page size of the image library
    pub image_page_size: usize,
    /// Page size of the category list
    pub category_page_size: usize,
    /// Simulated latency for mutations in milliseconds
    pub mutation_delay_ms: u64,
    /// How new record ids are generated
    pub id_strategy: IdStrategy,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            image_page_size: 8,
            category_page_size: 10,
            mutation_delay_ms: 500,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl RestaurantConfig {
    fn collection(&self, name: &str, page_size: usize) -> CollectionConfig {
        CollectionConfig {
            name: name.to_string(),
            page_size,
            mutation_delay_ms: self.mutation_delay_ms,
            id_strategy: self.id_strategy,
        }
    }
}

/// All collections of the dashboard.
#[derive(Debug)]
pub struct Restaurant<L = FixedLatency> {
    users: CollectionManager<User, L>,
    tables: CollectionManager<DiningTable, L>,
    reservations: CollectionManager<Reservation, L>,
    menu_items: CollectionManager<MenuItem, L>,
    categories: CollectionManager<Category, L>,
    images: CollectionManager<ManagedImage, L>,
    /// Serializes menu item writes that resolve a category against
    /// category deletes, across both collections' delays
    catalog: Mutex<()>,
}

impl Restaurant<FixedLatency> {
    /// Creates the seeded service with mutations delayed by
    /// `config.mutation_delay_ms`.
    pub fn new(config: RestaurantConfig) -> Result<Self, AdminError> {
        let latency = FixedLatency::from_millis(config.mutation_delay_ms);
        Self::seeded(config, latency)
    }
}

impl<L: Latency + Clone> Restaurant<L> {
    /// Creates a service over the given initial records.
    pub fn from_seed(seed: SeedData, config: RestaurantConfig, latency: L) -> Result<Self, AdminError> {
        let page_size = config.page_size;
        Ok(Self {
            users: CollectionManager::with_latency(
                seed.users,
                config.collection("users", page_size),
                latency.clone(),
            )?,
            tables: CollectionManager::with_latency(
                seed.tables,
                config.collection("tables", page_size),
                latency.clone(),
            )?,
            reservations: CollectionManager::with_latency(
                seed.reservations,
                config.collection("reservations", page_size),
                latency.clone(),
            )?,
            menu_items: CollectionManager::with_latency(
                seed.menu_items,
                config.collection("menu_items", page_size),
                latency.clone(),
            )?,
            categories: CollectionManager::with_latency(
                seed.categories,
                config.collection("categories", config.category_page_size),
                latency.clone(),
            )?,
            images: CollectionManager::with_latency(
                seed.images,
                config.collection("images", config.image_page_size),
                latency,
            )?,
            catalog: Mutex::new(()),
        })
    }

    /// Creates a service with no records.
    pub fn empty(config: RestaurantConfig, latency: L) -> Result<Self, AdminError> {
        Self::from_seed(SeedData::default(), config, latency)
    }

    /// Creates a service loaded with the demo data set.
    pub fn seeded(config: RestaurantConfig, latency: L) -> Result<Self, AdminError> {
        Self::from_seed(SeedData::mock(Utc::now()), config, latency)
    }
}

impl<L: Latency> Restaurant<L> {
    pub fn users(&self) -> &CollectionManager<User, L> {
        &self.users
    }

    pub fn tables(&self) -> &CollectionManager<DiningTable, L> {
        &self.tables
    }

    pub fn reservations(&self) -> &CollectionManager<Reservation, L> {
        &self.reservations
    }

    pub fn menu_items(&self) -> &CollectionManager<MenuItem, L> {
        &self.menu_items
    }

    pub fn categories(&self) -> &CollectionManager<Category, L> {
        &self.categories
    }

    pub fn images(&self) -> &CollectionManager<ManagedImage, L> {
        &self.images
    }

    /// Returns `true` while any collection has a mutation in flight.
    pub fn is_loading(&self) -> bool {
        self.users.is_loading()
            || self.tables.is_loading()
            || self.reservations.is_loading()
            || self.menu_items.is_loading()
            || self.categories.is_loading()
            || self.images.is_loading()
    }

    fn table_name(&self, table_id: &str) -> String {
        self.tables
            .get_by_id(table_id)
            .map(|table| table.name.clone())
            .unwrap_or_else(|| UNKNOWN_TABLE.to_string())
    }

    fn category_name(&self, category_id: &str) -> String {
        self.categories
            .get_by_id(category_id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    }

    // Users

    pub async fn add_user(&self, user: User) -> Result<Record<User>, AdminError> {
        user.validate()?;
        Ok(self.users.add(user).await)
    }

    pub async fn update_user(&self, id: &str, patch: UserUpdate) -> Result<Option<Record<User>>, AdminError> {
        patch.validate()?;
        Ok(self.users.update(id, patch).await)
    }

    pub async fn delete_user(&self, id: &str) {
        self.users.delete(id).await;
    }

    // Tables

    pub async fn add_table(&self, table: DiningTable) -> Result<Record<DiningTable>, AdminError> {
        table.validate()?;
        Ok(self.tables.add(table).await)
    }

    pub async fn update_table(
        &self,
        id: &str,
        patch: DiningTableUpdate,
    ) -> Result<Option<Record<DiningTable>>, AdminError> {
        patch.validate()?;
        Ok(self.tables.update(id, patch).await)
    }

    pub async fn delete_table(&self, id: &str) {
        self.tables.delete(id).await;
    }

    // Reservations

    /// Validates and stores a reservation, filling `table_name` from the
    /// tables collection.
    pub async fn add_reservation(&self, mut reservation: Reservation) -> Result<Record<Reservation>, AdminError> {
        reservation.validate()?;
        reservation.table_name = self.table_name(&reservation.table_id);
        Ok(self.reservations.add(reservation).await)
    }

    /// Validates and applies a reservation patch. `table_name` follows
    /// `table_id` and is otherwise left alone.
    pub async fn update_reservation(
        &self,
        id: &str,
        mut patch: ReservationUpdate,
    ) -> Result<Option<Record<Reservation>>, AdminError> {
        patch.validate()?;
        patch.table_name = patch.table_id.as_deref().map(|table_id| self.table_name(table_id));
        Ok(self.reservations.update(id, patch).await)
    }

    pub async fn delete_reservation(&self, id: &str) {
        self.reservations.delete(id).await;
    }

    // Menu items

    /// Validates and stores a menu item, filling `category_name` from the
    /// categories collection.
    ///
    /// Runs after any category delete already queued, so the name reflects
    /// whether the category still exists.
    pub async fn add_menu_item(&self, mut item: MenuItem) -> Result<Record<MenuItem>, AdminError> {
        item.validate()?;
        let _catalog = self.catalog.lock().await;
        item.category_name = self.category_name(&item.category_id);
        Ok(self.menu_items.add(item).await)
    }

    pub async fn update_menu_item(
        &self,
        id: &str,
        mut patch: MenuItemUpdate,
    ) -> Result<Option<Record<MenuItem>>, AdminError> {
        patch.validate()?;
        let _catalog = if patch.category_id.is_some() {
            Some(self.catalog.lock().await)
        } else {
            None
        };
        patch.category_name = patch
            .category_id
            .as_deref()
            .map(|category_id| self.category_name(category_id));
        Ok(self.menu_items.update(id, patch).await)
    }

    pub async fn delete_menu_item(&self, id: &str) {
        self.menu_items.delete(id).await;
    }

    // Categories

    pub async fn add_category(&self, category: Category) -> Result<Record<Category>, AdminError> {
        category.validate()?;
        Ok(self.categories.add(category).await)
    }

    pub async fn update_category(
        &self,
        id: &str,
        patch: CategoryUpdate,
    ) -> Result<Option<Record<Category>>, AdminError> {
        patch.validate()?;
        Ok(self.categories.update(id, patch).await)
    }

    /// Deletes a category unless a menu item still references it.
    ///
    /// # Errors
    /// Returns [`AdminError::CategoryInUse`] with the number of referencing
    /// menu items, counting items whose add was queued before this call.
    pub async fn delete_category(&self, id: &str) -> Result<(), AdminError> {
        let _catalog = self.catalog.lock().await;
        let menu_items = self
            .menu_items
            .records()
            .iter()
            .filter(|item| item.category_id == id)
            .count();
        if menu_items > 0 {
            tracing::debug!("Category '{}' kept: used by {} menu items", id, menu_items);
            return Err(AdminError::CategoryInUse {
                category_id: id.to_string(),
                menu_items,
            });
        }
        self.categories.delete(id).await;
        Ok(())
    }

    // Images

    pub async fn add_image(&self, image: ManagedImage) -> Result<Record<ManagedImage>, AdminError> {
        image.validate()?;
        Ok(self.images.add(image).await)
    }

    pub async fn update_image(
        &self,
        id: &str,
        patch: ManagedImageUpdate,
    ) -> Result<Option<Record<ManagedImage>>, AdminError> {
        patch.validate()?;
        Ok(self.images.update(id, patch).await)
    }

    pub async fn delete_image(&self, id: &str) {
        self.images.delete(id).await;
    }
}

/// Status and date narrowing applied to a page of reservations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    /// Keep only this status; `None` keeps all
    pub status: Option<ReservationStatus>,
    /// Keep only reservations on this calendar day (UTC)
    pub date: Option<NaiveDate>,
}

impl ReservationFilter {
    /// Returns `true` if the reservation passes both conditions.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        let status_match = self.status.map_or(true, |status| reservation.status == status);
        let date_match = self
            .date
            .map_or(true, |date| reservation.date_time.date_naive() == date);
        status_match && date_match
    }

    /// Computes the current reservations page with the filter applied before
    /// pagination, so counts and page totals describe the filtered set.
    pub fn view<L: Latency>(&self, reservations: &CollectionManager<Reservation, L>) -> View<Reservation> {
        reservations.view_filtered(|record| self.matches(record))
    }

    /// Keeps the records of `page` that pass the filter, in order.
    pub fn apply(&self, page: &[Record<Reservation>]) -> Vec<Record<Reservation>> {
        page.iter().filter(|record| self.matches(record)).cloned().collect()
    }
}
