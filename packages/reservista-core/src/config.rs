//! Collection configuration.

use std::time::Duration;

use crate::error::CollectionError;
use crate::id::IdStrategy;

/// Collection manager configuration.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Collection name used in log output and errors
    pub name: String,
    /// Records per page (must be > 0)
    pub page_size: usize,
    /// Simulated latency for add/update/delete in milliseconds
    pub mutation_delay_ms: u64,
    /// How new record ids are generated
    pub id_strategy: IdStrategy,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: "records".to_string(),
            page_size: 10,
            mutation_delay_ms: 500,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl CollectionConfig {
    /// Creates a configuration for the named collection with the given page size.
    pub fn named(name: impl Into<String>, page_size: usize) -> Self {
        Self {
            name: name.into(),
            page_size,
            ..Default::default()
        }
    }

    /// Returns the mutation delay as a `Duration`.
    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.mutation_delay_ms)
    }

    /// Checks that the configuration can back a collection manager.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.page_size == 0 {
            return Err(CollectionError::InvalidPageSize {
                collection: self.name.clone(),
                page_size: self.page_size,
            });
        }
        Ok(())
    }
}
