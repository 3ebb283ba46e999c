//! Summary cards of the dashboard landing page.

use std::fmt;

use chrono::NaiveDate;
use reservista_core::Latency;
use serde::Serialize;

use crate::entities::{ReservationStatus, TableStatus};
use crate::restaurant::Restaurant;

/// Counts shown on the dashboard, computed from the live collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Reservations on the given day (UTC)
    pub todays_reservations: usize,
    /// Reservations awaiting confirmation
    pub pending_reservations: usize,
    pub occupied_tables: usize,
    pub total_tables: usize,
    pub total_menu_items: usize,
}

impl DashboardSummary {
    /// Computes the summary for `today`.
    pub fn collect<L: Latency>(restaurant: &Restaurant<L>, today: NaiveDate) -> Self {
        let reservations = restaurant.reservations().records();
        let tables = restaurant.tables().records();

        Self {
            todays_reservations: reservations
                .iter()
                .filter(|r| r.date_time.date_naive() == today)
                .count(),
            pending_reservations: reservations
                .iter()
                .filter(|r| r.status == ReservationStatus::Pending)
                .count(),
            occupied_tables: tables
                .iter()
                .filter(|t| t.status == TableStatus::Occupied)
                .count(),
            total_tables: tables.len(),
            total_menu_items: restaurant.menu_items().len(),
        }
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Today's Reservations: {}", self.todays_reservations)?;
        writeln!(f, "Pending Approvals: {}", self.pending_reservations)?;
        writeln!(f, "Occupied Tables: {}/{}", self.occupied_tables, self.total_tables)?;
        write!(f, "Total Menu Items: {}", self.total_menu_items)
    }
}

#[cfg(test)]
mod tests {
    use reservista_core::NoLatency;

    use super::*;
    use crate::entities::{DiningTableUpdate, Reservation};
    use crate::restaurant::RestaurantConfig;

    #[tokio::test]
    async fn test_summary_tracks_mutations() {
        let restaurant = Restaurant::seeded(RestaurantConfig::default(), NoLatency).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 7, 21).unwrap();

        let summary = DashboardSummary::collect(&restaurant, day);
        assert_eq!(
            summary,
            DashboardSummary {
                todays_reservations: 1,
                pending_reservations: 1,
                occupied_tables: 1,
                total_tables: 5,
                total_menu_items: 3,
            }
        );

        let at = day.and_hms_opt(12, 30, 0).unwrap().and_utc();
        restaurant
            .add_reservation(Reservation::new("Ada Lovelace", "555-1815", "t1", at, 2, ReservationStatus::Pending))
            .await
            .unwrap();
        restaurant
            .update_table(
                "t1",
                DiningTableUpdate {
                    status: Some(TableStatus::Occupied),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let summary = DashboardSummary::collect(&restaurant, day);
        assert_eq!(summary.todays_reservations, 2);
        assert_eq!(summary.pending_reservations, 2);
        assert_eq!(summary.occupied_tables, 2);
    }

    #[test]
    fn test_display() {
        let summary = DashboardSummary {
            todays_reservations: 12,
            pending_reservations: 3,
            occupied_tables: 8,
            total_tables: 15,
            total_menu_items: 45,
        };
        assert_eq!(
            summary.to_string(),
            "Today's Reservations: 12\nPending Approvals: 3\nOccupied Tables: 8/15\nTotal Menu Items: 45"
        );
    }
}
