//! Record id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::record::RecordId;

/// Source of fresh record ids.
pub trait IdGenerator: Send + Sync {
    /// Returns the next id. Callers re-draw on collision with existing records.
    fn next_id(&self) -> RecordId;
}

/// Random v4 UUID ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> RecordId {
        RecordId::from(uuid::Uuid::new_v4().to_string())
    }
}

/// Monotonic decimal ids scoped to one generator instance.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator whose first id is `"1"`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> RecordId {
        RecordId::from(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

/// Id generation strategy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random UUIDs
    #[default]
    Uuid,
    /// Per-collection counter starting at 1
    Sequential,
}

impl IdStrategy {
    /// Builds the generator for this strategy.
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}
