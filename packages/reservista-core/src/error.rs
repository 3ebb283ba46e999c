//! Collection error types.

use thiserror::Error;

/// Errors raised while constructing a collection manager.
///
/// Mutations and lookups never fail: unknown ids surface as `None` or a
/// no-op instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Page size must be a positive number of records
    #[error("Invalid page size {page_size} for collection '{collection}'")]
    InvalidPageSize { collection: String, page_size: usize },

    /// Seed data contained the same id twice
    #[error("Duplicate record id '{id}' in collection '{collection}'")]
    DuplicateId { collection: String, id: String },
}
