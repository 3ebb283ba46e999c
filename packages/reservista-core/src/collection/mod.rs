//! Collection manager: owns a record collection and derives paginated views.
//!
//! State is published as immutable snapshots through `ArcSwap`, so views are
//! computed without blocking writers. Mutations queue on a FIFO tokio mutex,
//! pause on the latency port, then publish a new snapshot.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::config::CollectionConfig;
use crate::error::CollectionError;
use crate::id::IdGenerator;
use crate::latency::{FixedLatency, Latency};
use crate::record::{Fields, Record, RecordId};
use crate::search::SearchTerm;
use crate::view::{self, View};

/// Immutable state published to readers.
#[derive(Debug)]
struct Snapshot<T> {
    /// Records in collection order (newly added first)
    records: Arc<Vec<Record<T>>>,
    /// Active search term
    search: SearchTerm,
    /// 1-based current page
    page: usize,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            search: self.search.clone(),
            page: self.page,
        }
    }
}

impl<T: Clone> Snapshot<T> {
    fn with_records(&self, records: Vec<Record<T>>) -> Self {
        Self {
            records: Arc::new(records),
            search: self.search.clone(),
            page: self.page,
        }
    }
}

/// Decrements the in-flight counter when a mutation finishes.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// In-memory collection of records with search, pagination and simulated
/// asynchronous mutations.
pub struct CollectionManager<T, L = FixedLatency> {
    /// Collection name for logs
    name: String,
    /// Records per page
    page_size: usize,
    /// Current published state
    state: ArcSwap<Snapshot<T>>,
    /// FIFO queue serializing mutations
    writer: Mutex<()>,
    /// Mutations invoked but not yet completed
    in_flight: AtomicUsize,
    /// Simulated round trip for mutations
    latency: L,
    /// Id source for new records
    ids: Box<dyn IdGenerator>,
}

impl<T: Fields> CollectionManager<T, FixedLatency> {
    /// Creates a manager that delays mutations by `config.mutation_delay_ms`.
    ///
    /// # Errors
    /// Returns an error if the page size is zero or `initial` repeats an id.
    pub fn new(initial: Vec<Record<T>>, config: CollectionConfig) -> Result<Self, CollectionError> {
        let latency = FixedLatency::new(config.mutation_delay());
        Self::with_latency(initial, config, latency)
    }
}

impl<T: Fields, L: Latency> CollectionManager<T, L> {
    /// Creates a manager with an injected latency port.
    ///
    /// # Errors
    /// Returns an error if the page size is zero or `initial` repeats an id.
    pub fn with_latency(
        initial: Vec<Record<T>>,
        config: CollectionConfig,
        latency: L,
    ) -> Result<Self, CollectionError> {
        config.validate()?;

        let mut seen = std::collections::HashSet::new();
        for record in &initial {
            if !seen.insert(record.id()) {
                return Err(CollectionError::DuplicateId {
                    collection: config.name.clone(),
                    id: record.id().to_string(),
                });
            }
        }

        tracing::debug!(
            "Collection '{}' created with {} records, page size {}",
            config.name,
            initial.len(),
            config.page_size
        );

        Ok(Self {
            ids: config.id_strategy.generator(),
            name: config.name,
            page_size: config.page_size,
            state: ArcSwap::from_pointee(Snapshot {
                records: Arc::new(initial),
                search: SearchTerm::default(),
                page: 1,
            }),
            writer: Mutex::new(()),
            in_flight: AtomicUsize::new(0),
            latency,
        })
    }

    /// Replaces the id generator (e.g. to share a counter across tests).
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixed page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of records, ignoring the search term.
    pub fn len(&self) -> usize {
        self.state.load().records.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` while any mutation is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Returns the whole collection in collection order.
    pub fn records(&self) -> Arc<Vec<Record<T>>> {
        Arc::clone(&self.state.load().records)
    }

    /// Computes the current page for the active search term.
    pub fn view(&self) -> View<T> {
        let snapshot = self.state.load();
        view::compute_view(
            &snapshot.records,
            &snapshot.search,
            snapshot.page,
            self.page_size,
            self.is_loading(),
        )
    }

    /// Computes the current page over the records that pass `keep`.
    ///
    /// Counts and page totals describe the narrowed set; `original_count`
    /// stays the size of the whole collection.
    pub fn view_filtered(&self, keep: impl Fn(&Record<T>) -> bool) -> View<T> {
        let snapshot = self.state.load();
        let records: Vec<Record<T>> = snapshot
            .records
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect();
        let mut view = view::compute_view(
            &records,
            &snapshot.search,
            snapshot.page,
            self.page_size,
            self.is_loading(),
        );
        view.original_count = snapshot.records.len();
        view
    }

    /// Looks up a record by id.
    pub fn get_by_id(&self, id: &str) -> Option<Record<T>> {
        self.state
            .load()
            .records
            .iter()
            .find(|record| record.id().as_str() == id)
            .cloned()
    }

    /// Replaces the search term and returns to page 1.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let search = SearchTerm::new(term);
        self.state.rcu(|snapshot| Snapshot {
            records: Arc::clone(&snapshot.records),
            search: search.clone(),
            page: 1,
        });
    }

    /// Moves to `page` (1-based; 0 is treated as 1).
    ///
    /// Pages past the end are stored as given and yield an empty view.
    pub fn set_page(&self, page: usize) {
        let page = page.max(1);
        self.state.rcu(|snapshot| Snapshot {
            page,
            ..Snapshot::clone(snapshot)
        });
    }

    /// Returns to page 1 if the current page lies past the last page.
    ///
    /// Returns `true` if the page changed. An empty result keeps its page.
    pub fn reset_page_if_out_of_range(&self) -> bool {
        let mut reset = false;
        self.state.rcu(|snapshot| {
            let filtered = snapshot
                .records
                .iter()
                .filter(|record| snapshot.search.matches(record))
                .count();
            let pages = view::total_pages(filtered, self.page_size);
            reset = pages > 0 && snapshot.page > pages;
            Snapshot {
                page: if reset { 1 } else { snapshot.page },
                ..Snapshot::clone(snapshot)
            }
        });
        reset
    }

    /// Adds a record built from `fields`, assigning a fresh id and timestamp.
    ///
    /// The record is placed at the front of the collection.
    pub async fn add(&self, fields: T) -> Record<T> {
        let _in_flight = InFlight::enter(&self.in_flight);
        let _writer = self.writer.lock().await;
        self.latency.pause().await;

        let fields = fields.sanitize();
        let snapshot = self.state.load();
        let mut id = self.ids.next_id();
        while snapshot.records.iter().any(|record| record.id() == &id) {
            id = self.ids.next_id();
        }
        let record = Record::new(id, Utc::now(), fields);

        self.state.rcu(|snapshot| {
            let mut records = Vec::with_capacity(snapshot.records.len() + 1);
            records.push(record.clone());
            records.extend(snapshot.records.iter().cloned());
            snapshot.with_records(records)
        });

        tracing::debug!("Added record '{}' to '{}'", record.id(), self.name);
        record
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Option<Record<T>> {
        let _in_flight = InFlight::enter(&self.in_flight);
        let _writer = self.writer.lock().await;
        self.latency.pause().await;

        let current = self.state.load();
        let Some(index) = current
            .records
            .iter()
            .position(|record| record.id().as_str() == id)
        else {
            tracing::debug!("Update skipped: record '{}' not found in '{}'", id, self.name);
            return None;
        };

        let mut updated = current.records[index].clone();
        updated.merge(patch);

        // Only this task writes records while the writer lock is held, so
        // `index` stays valid across retries caused by page/search changes.
        self.state.rcu(|snapshot| {
            let mut records = (*snapshot.records).clone();
            records[index] = updated.clone();
            snapshot.with_records(records)
        });

        tracing::debug!("Updated record '{}' in '{}'", id, self.name);
        Some(updated)
    }

    /// Removes the record with `id`; does nothing if it is absent.
    pub async fn delete(&self, id: &str) {
        let _in_flight = InFlight::enter(&self.in_flight);
        let _writer = self.writer.lock().await;
        self.latency.pause().await;

        if !self
            .state
            .load()
            .records
            .iter()
            .any(|record| record.id().as_str() == id)
        {
            tracing::debug!("Delete skipped: record '{}' not found in '{}'", id, self.name);
            return;
        }

        self.state.rcu(|snapshot| {
            let records = snapshot
                .records
                .iter()
                .filter(|record| record.id().as_str() != id)
                .cloned()
                .collect();
            snapshot.with_records(records)
        });

        tracing::debug!("Deleted record '{}' from '{}'", id, self.name);
    }

    /// Returns `true` if a record with `id` exists.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.state.load().records.iter().any(|record| record.id() == id)
    }
}

impl<T, L> std::fmt::Debug for CollectionManager<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionManager")
            .field("name", &self.name)
            .field("page_size", &self.page_size)
            .field("records", &self.state.load().records.len())
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish()
    }
}
