//! # Order Commands
//!
//! Order history and the tracking display.

use tracing::debug;

use crate::error::ApiError;
use foodfast_api::Backend;
use foodfast_core::timeline::TimelineStep;
use foodfast_core::types::Order;

/// Fetches a single order.
pub async fn get_order(backend: &Backend, order_id: &str) -> Result<Order, ApiError> {
    debug!(order_id = %order_id, "get_order command");
    Ok(backend.orders().get(order_id).await?)
}

/// Lists the session's orders.
pub async fn list_orders(backend: &Backend) -> Result<Vec<Order>, ApiError> {
    debug!("list_orders command");
    Ok(backend.orders().list().await?)
}

/// Fetches an order and projects its tracking timeline.
///
/// The timeline is a derived view: it is recomputed from the order's
/// status and creation time on every call, nothing is stored.
pub async fn get_order_timeline(
    backend: &Backend,
    order_id: &str,
) -> Result<Vec<TimelineStep>, ApiError> {
    debug!(order_id = %order_id, "get_order_timeline command");
    let order = backend.orders().get(order_id).await?;
    Ok(order.timeline())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::checkout::{place_order, CheckoutRequest};
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use foodfast_core::types::{DeliveryDetails, OrderStatus, PaymentMethod};

    async fn placed_order(state: &AppState) -> Order {
        add_to_cart(&state.backend, &state.cart, "1", Some(2))
            .await
            .unwrap();
        place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: DeliveryDetails {
                    first_name: "John".to_string(),
                    last_name: "Doe".to_string(),
                    address: "123 Main St".to_string(),
                    city: "New York".to_string(),
                    state: None,
                    zip_code: "10001".to_string(),
                    phone: "(555) 123-4567".to_string(),
                },
                method: PaymentMethod::CashOnDelivery,
                card: None,
            },
        )
        .await
        .unwrap()
        .order
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let state = AppState::for_tests();
        let order = placed_order(&state).await;

        let fetched = get_order(&state.backend, &order.id).await.unwrap();
        assert_eq!(fetched.id, order.id);

        let all = list_orders(&state.backend).await.unwrap();
        assert_eq!(all.len(), 1);

        let err = get_order(&state.backend, "ord_missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_timeline_follows_status() {
        let state = AppState::for_tests();
        let order = placed_order(&state).await;

        let steps = get_order_timeline(&state.backend, &order.id).await.unwrap();
        assert!(steps[0].current); // placed

        // kitchen and driver make progress
        state
            .backend
            .orders()
            .advance_status(&order.id, OrderStatus::OutForDelivery)
            .await
            .unwrap();

        let steps = get_order_timeline(&state.backend, &order.id).await.unwrap();
        assert!(steps[0].completed && !steps[0].current);
        assert!(steps[1].completed && !steps[1].current);
        assert!(steps[2].completed && steps[2].current);
        assert!(!steps[3].completed && !steps[3].current);
    }
}
