//! Generic in-memory collection manager.
//!
//! Provides uniquely identified, timestamped records, a search-filtered
//! and paginated view over them, and mutation operations that pause on an
//! injectable latency port before publishing their effect.

pub mod collection;
pub mod config;
pub mod error;
pub mod id;
pub mod latency;
pub mod record;
pub mod search;
pub mod view;

pub use collection::CollectionManager;
pub use config::CollectionConfig;
pub use error::CollectionError;
pub use id::{IdGenerator, IdStrategy, SequentialIds, UuidIds};
pub use latency::{FixedLatency, Latency, NoLatency};
pub use record::{Fields, Record, RecordId};
pub use search::SearchTerm;
pub use view::{PageWindow, View};
