//! Customer reservations.

use std::fmt;

use chrono::{DateTime, Utc};
use reservista_core::Fields;
use serde::{Deserialize, Serialize};

use super::patch_field;
use crate::validation::{Checker, Validate, ValidationErrors};

/// Lifecycle of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
    Completed,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A booked table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub table_id: String,
    /// Display name of `table_id`, kept in sync by the restaurant service
    #[serde(default)]
    pub table_name: String,
    pub date_time: DateTime<Utc>,
    pub guests: u32,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Reservation {
    /// Creates a reservation without e-mail or notes.
    pub fn new(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        table_id: impl Into<String>,
        date_time: DateTime<Utc>,
        guests: u32,
        status: ReservationStatus,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_email: None,
            table_id: table_id.into(),
            table_name: String::new(),
            date_time,
            guests,
            status,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationUpdate {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub table_id: Option<String>,
    /// Overwritten by the restaurant service whenever `table_id` is set
    pub table_name: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub guests: Option<u32>,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
}

impl Fields for Reservation {
    type Patch = ReservationUpdate;

    fn merge(&mut self, patch: ReservationUpdate) {
        patch_field(&mut self.customer_name, patch.customer_name);
        patch_field(&mut self.customer_phone, patch.customer_phone);
        if let Some(email) = patch.customer_email {
            self.customer_email = Some(email).filter(|e| !e.is_empty());
        }
        patch_field(&mut self.table_id, patch.table_id);
        patch_field(&mut self.table_name, patch.table_name);
        patch_field(&mut self.date_time, patch.date_time);
        patch_field(&mut self.guests, patch.guests);
        patch_field(&mut self.status, patch.status);
        if let Some(notes) = patch.notes {
            self.notes = Some(notes).filter(|n| !n.is_empty());
        }
    }
}

const NAME_MESSAGE: &str = "Customer name must be at least 2 characters.";
const PHONE_MESSAGE: &str = "Phone number seems too short.";
const EMAIL_MESSAGE: &str = "Invalid email address.";
const TABLE_MESSAGE: &str = "Please select a table.";
const GUESTS_MESSAGE: &str = "Number of guests must be at least 1.";

impl Validate for Reservation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars("customerName", &self.customer_name, 2, NAME_MESSAGE)
            .min_chars("customerPhone", &self.customer_phone, 7, PHONE_MESSAGE)
            .email_or_empty("customerEmail", self.customer_email.as_deref(), EMAIL_MESSAGE)
            .min_chars("tableId", &self.table_id, 1, TABLE_MESSAGE)
            .at_least("guests", self.guests, 1, GUESTS_MESSAGE)
            .finish()
    }
}

impl Validate for ReservationUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .min_chars_opt("customerName", self.customer_name.as_deref(), 2, NAME_MESSAGE)
            .min_chars_opt("customerPhone", self.customer_phone.as_deref(), 7, PHONE_MESSAGE)
            .email_or_empty("customerEmail", self.customer_email.as_deref(), EMAIL_MESSAGE)
            .min_chars_opt("tableId", self.table_id.as_deref(), 1, TABLE_MESSAGE)
            .at_least_opt("guests", self.guests, 1, GUESTS_MESSAGE)
            .finish()
    }
}
