//! # Order Timeline Projection
//!
//! Derives the four-step tracking display from an order's status.
//!
//! This is a pure view: no stored state, recomputed on every read.
//! ```text
//! status = out-for-delivery
//!
//!   ● Order Placed        completed      14:32
//!   ● Preparing           completed      Est. 5-10 min
//!   ◉ Out for Delivery    completed, CURRENT
//!   ○ Delivered           pending        Est. 25-35 min
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Order, OrderStatus};

/// One step of the tracking display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    /// The status this step represents.
    pub status: OrderStatus,

    /// Heading shown to the customer.
    pub title: String,

    /// One-line explanation.
    pub description: String,

    /// Either a clock time (for the placed step) or an estimate label.
    pub timestamp: String,

    /// True when the order has reached or passed this step.
    pub completed: bool,

    /// True only for the step equal to the order's current status.
    pub current: bool,
}

/// Projects a status and creation time into the four display steps.
///
/// `completed` is `step <= status` in the fixed ordering; `current` is
/// `step == status`. The placed step shows the order's creation time,
/// the later steps show delivery estimates until they complete.
pub fn order_timeline(status: OrderStatus, created_at: DateTime<Utc>) -> Vec<TimelineStep> {
    OrderStatus::ALL
        .iter()
        .map(|&step| {
            let completed = step <= status;
            let (title, description, estimate) = step_copy(step);
            let timestamp = match step {
                OrderStatus::Placed => created_at.format("%H:%M").to_string(),
                OrderStatus::Delivered if completed => "Completed".to_string(),
                _ => estimate.to_string(),
            };

            TimelineStep {
                status: step,
                title: title.to_string(),
                description: description.to_string(),
                timestamp,
                completed,
                current: step == status,
            }
        })
        .collect()
}

impl Order {
    /// The tracking display for this order.
    pub fn timeline(&self) -> Vec<TimelineStep> {
        order_timeline(self.status, self.created_at)
    }
}

/// Display copy per step: (title, description, estimate label).
const fn step_copy(step: OrderStatus) -> (&'static str, &'static str, &'static str) {
    match step {
        OrderStatus::Placed => ("Order Placed", "Your order has been confirmed", ""),
        OrderStatus::Preparing => ("Preparing", "Kitchen is preparing your order", "Est. 5-10 min"),
        OrderStatus::OutForDelivery => ("Out for Delivery", "Driver is on the way", "Est. 20-30 min"),
        OrderStatus::Delivered => ("Delivered", "Order delivered successfully", "Est. 25-35 min"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 14, 32, 0).unwrap()
    }

    #[test]
    fn test_out_for_delivery_projection() {
        let steps = order_timeline(OrderStatus::OutForDelivery, created_at());
        assert_eq!(steps.len(), 4);

        // placed and preparing: done, not current
        assert!(steps[0].completed && !steps[0].current);
        assert!(steps[1].completed && !steps[1].current);

        // out-for-delivery: done and current
        assert!(steps[2].completed && steps[2].current);

        // delivered: still ahead
        assert!(!steps[3].completed && !steps[3].current);
    }

    #[test]
    fn test_placed_projection() {
        let steps = order_timeline(OrderStatus::Placed, created_at());
        assert!(steps[0].completed && steps[0].current);
        assert!(steps[1..].iter().all(|s| !s.completed && !s.current));
    }

    #[test]
    fn test_delivered_projection() {
        let steps = order_timeline(OrderStatus::Delivered, created_at());
        assert!(steps.iter().all(|s| s.completed));
        assert!(steps[3].current);
        assert_eq!(steps[3].timestamp, "Completed");
    }

    #[test]
    fn test_placed_step_shows_creation_time() {
        let steps = order_timeline(OrderStatus::Preparing, created_at());
        assert_eq!(steps[0].timestamp, "14:32");
        assert_eq!(steps[0].title, "Order Placed");
        assert_eq!(steps[2].timestamp, "Est. 20-30 min");
    }

    #[test]
    fn test_step_order_is_fixed() {
        let steps = order_timeline(OrderStatus::Placed, created_at());
        let statuses: Vec<OrderStatus> = steps.iter().map(|s| s.status).collect();
        assert_eq!(statuses, OrderStatus::ALL.to_vec());
    }
}
