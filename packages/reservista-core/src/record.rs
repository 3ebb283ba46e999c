//! Record identity, timestamps and field merging.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the manager that payloads may never set.
pub const RESERVED_KEYS: [&str; 2] = ["id", "createdAt"];

/// Unique record identifier within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Domain payload stored inside a [`Record`].
///
/// `Patch` carries the subset of fields an update changes; `merge` applies
/// it shallowly, keeping every field the patch leaves out.
pub trait Fields: Clone + Serialize + Send + Sync + 'static {
    /// Partial update payload
    type Patch: Send;

    /// Applies `patch` on top of the current fields.
    fn merge(&mut self, patch: Self::Patch);

    /// Drops anything that would shadow manager-owned keys.
    fn sanitize(self) -> Self {
        self
    }
}

impl Fields for Map<String, Value> {
    type Patch = Map<String, Value>;

    fn merge(&mut self, patch: Self::Patch) {
        for (key, value) in patch {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            self.insert(key, value);
        }
    }

    fn sanitize(mut self) -> Self {
        for key in RESERVED_KEYS {
            self.remove(key);
        }
        self
    }
}

/// A uniquely identified, timestamped entity.
///
/// `id` and `created_at` are fixed at construction; only `fields` changes
/// over the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    id: RecordId,
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    fields: T,
}

impl<T> Record<T> {
    /// Creates a record with an explicit id and timestamp (seed data).
    pub fn new(id: impl Into<RecordId>, created_at: DateTime<Utc>, fields: T) -> Self {
        Self {
            id: id.into(),
            created_at,
            fields,
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the domain fields.
    pub fn fields(&self) -> &T {
        &self.fields
    }

    /// Consumes the record and returns its domain fields.
    pub fn into_fields(self) -> T {
        self.fields
    }
}

impl<T: Fields> Record<T> {
    pub(crate) fn merge(&mut self, patch: T::Patch) {
        self.fields.merge(patch);
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}
