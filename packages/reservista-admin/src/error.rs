//! Restaurant service error types.

use reservista_core::CollectionError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors raised by the restaurant service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Payload failed one or more field rules
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Category is still referenced by menu items
    #[error("Category '{category_id}' is used by {menu_items} menu item(s)")]
    CategoryInUse { category_id: String, menu_items: usize },

    /// Collection could not be built
    #[error(transparent)]
    Collection(#[from] CollectionError),
}
