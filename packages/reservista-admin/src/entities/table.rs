//! Dining tables.

use std::fmt;

use reservista_core::Fields;
use serde::{Deserialize, Serialize};

use super::patch_field;
use crate::validation::{Checker, Validate, ValidationErrors};

/// Current use of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Maintenance => "maintenance",
        };
        f.write_str(label)
    }
}

/// A table guests can be seated at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub name: String,
    /// Seats
    pub capacity: u32,
    pub status: TableStatus,
}

impl DiningTable {
    pub fn new(name: impl Into<String>, capacity: u32, status: TableStatus) -> Self {
        Self {
            name: name.into(),
            capacity,
            status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub status: Option<TableStatus>,
}

impl Fields for DiningTable {
    type Patch = DiningTableUpdate;

    fn merge(&mut self, patch: DiningTableUpdate) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.capacity, patch.capacity);
        patch_field(&mut self.status, patch.status);
    }
}

const NAME_MESSAGE: &str = "Table name cannot be empty.";
const CAPACITY_MESSAGE: &str = "Capacity must be at least 1.";

impl Validate for DiningTable {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars("name", &self.name, 1, NAME_MESSAGE)
            .at_least("capacity", self.capacity, 1, CAPACITY_MESSAGE)
            .finish()
    }
}

impl Validate for DiningTableUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars_opt("name", self.name.as_deref(), 1, NAME_MESSAGE)
            .at_least_opt("capacity", self.capacity, 1, CAPACITY_MESSAGE)
            .finish()
    }
}
