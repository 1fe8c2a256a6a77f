//! # Order Service
//!
//! Order creation, fetch and the monotonic status machine.
//!
//! Orders live in a session-scoped Vec; nothing survives a restart.
//! The server assigns id, status and timestamp at creation. After that
//! the only mutable thing about an order is its status, and that only
//! moves forward.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::Shared;
use foodfast_core::types::{Order, OrderDraft, OrderStatus};
use foodfast_core::ValidationError;

/// Service handle for orders.
#[derive(Debug, Clone)]
pub struct OrderService {
    shared: Arc<Shared>,
}

impl OrderService {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        OrderService { shared }
    }

    /// Creates an order from a draft.
    ///
    /// ## What the Server Assigns
    /// - `id` (prefixed `ord_`)
    /// - `status` = placed
    /// - `created_at` = now
    ///
    /// The totals are carried over from the draft verbatim; the mock trusts
    /// checkout to have priced the cart. It still refuses an empty draft,
    /// the same re-check a real backend would make.
    pub async fn create(&self, draft: OrderDraft) -> ServiceResult<Order> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.order_create)
            .await;

        if draft.items.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        let order = Order {
            id: format!("ord_{}", self.shared.ids.generate()),
            user_id: draft.user_id,
            items: draft.items,
            subtotal_cents: draft.subtotal_cents,
            delivery_fee_cents: draft.delivery_fee_cents,
            tax_cents: draft.tax_cents,
            total_cents: draft.total_cents,
            status: OrderStatus::Placed,
            created_at: Utc::now(),
            delivery_address: draft.delivery_address,
        };

        info!(
            order_id = %order.id,
            total_cents = order.total_cents,
            items = order.items.len(),
            "Order created"
        );

        let mut orders = self.shared.orders.lock().expect("orders mutex poisoned");
        orders.push(order.clone());
        Ok(order)
    }

    /// Fetches a single order.
    pub async fn get(&self, id: &str) -> ServiceResult<Order> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.order_fetch)
            .await;

        debug!(order_id = %id, "Fetching order");

        let orders = self.shared.orders.lock().expect("orders mutex poisoned");
        orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Order", id))
    }

    /// Lists every order of the session, in creation order.
    pub async fn list(&self) -> ServiceResult<Vec<Order>> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.order_fetch)
            .await;

        let orders = self.shared.orders.lock().expect("orders mutex poisoned");
        debug!(count = orders.len(), "Listing orders");
        Ok(orders.clone())
    }

    /// Advances an order's status.
    ///
    /// The status machine is monotonic; moving backward (or re-announcing
    /// the current status) is rejected with a domain error. This is what
    /// the mocked kitchen/driver calls as the order progresses.
    pub async fn advance_status(&self, id: &str, status: OrderStatus) -> ServiceResult<Order> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.order_update)
            .await;

        let mut orders = self.shared.orders.lock().expect("orders mutex poisoned");
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::not_found("Order", id))?;

        order.advance_status(status)?;
        info!(order_id = %id, status = %status, "Order status advanced");
        Ok(order.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
