//! Restaurant administration domain.
//!
//! Wires one [`reservista_core::CollectionManager`] per entity into a
//! [`Restaurant`] service, validates every create and update payload, and
//! provides mock authentication with a route guard.

pub mod auth;
pub mod dashboard;
pub mod entities;
pub mod error;
pub mod format;
pub mod restaurant;
pub mod seed;
pub mod validation;

pub use auth::{AuthConfig, AuthError, AuthService, FileStorage, MemoryStorage, Route, SessionStorage, SessionUser};
pub use dashboard::DashboardSummary;
pub use error::AdminError;
pub use restaurant::{ReservationFilter, Restaurant, RestaurantConfig};
pub use seed::SeedData;
pub use validation::{FieldError, Validate, ValidationErrors};
