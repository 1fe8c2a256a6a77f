//! # Checkout Commands
//!
//! The transition from cart to placed order.
//!
//! ## Orchestration Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order                                                            │
//! │                                                                         │
//! │  1. Snapshot the cart                                                   │
//! │  2. Validate + price the draft (pure, foodfast-core)                    │
//! │       └── failure → VALIDATION_ERROR, nothing was sent anywhere         │
//! │  3. OrderService::create(draft)                                         │
//! │       └── failure → TRANSPORT_ERROR, cart untouched                     │
//! │  4. PaymentGateway::process(order, method, card)                        │
//! │       ├── Err            → TRANSPORT_ERROR, order exists, cart kept     │
//! │       ├── success=false  → PAYMENT_DECLINED, order exists, cart kept    │
//! │       └── success=true   → clear the cart, return order + txn id        │
//! │                                                                         │
//! │  The cart is cleared in exactly one place: after a confirmed payment.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};
use foodfast_api::Backend;
use foodfast_core::checkout::{build_order_draft, quote, OrderTotals};
use foodfast_core::types::{CardDetails, DeliveryDetails, Order, PaymentMethod};

/// Everything the checkout form submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub delivery: DeliveryDetails,
    pub method: PaymentMethod,
    /// Required when `method` is `credit-card`.
    pub card: Option<CardDetails>,
}

/// A successfully placed and paid order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order: Order,
    pub transaction_id: String,
}

/// Prices the current cart for the order summary panel.
pub fn get_checkout_quote(cart: &CartState, config: &ConfigState) -> OrderTotals {
    debug!("get_checkout_quote command");
    cart.with_cart(|c| quote(c, &config.pricing()))
}

/// Places an order: validate, create, pay, and clear the cart on success.
///
/// ## Failure Modes
/// - Empty cart / incomplete forms → `VALIDATION_ERROR`, no order created
/// - Gateway unreachable → `TRANSPORT_ERROR`
/// - Card declined → `PAYMENT_DECLINED`; the order stays created (status
///   placed) and the cart is NOT cleared, so the customer can retry with
///   a different payment method
pub async fn place_order(
    backend: &Backend,
    cart: &CartState,
    config: &ConfigState,
    user_id: &str,
    request: CheckoutRequest,
) -> Result<PlaceOrderResponse, ApiError> {
    debug!(user_id = %user_id, method = ?request.method, "place_order command");

    // Pure validation and pricing over a snapshot of the cart. The snapshot
    // is what gets frozen onto the order even if the cart changes while the
    // backend calls are in flight.
    let draft = cart.with_cart(|c| {
        build_order_draft(
            c,
            user_id,
            &request.delivery,
            request.method,
            request.card.as_ref(),
            &config.pricing(),
        )
    })?;

    let order = backend.orders().create(draft).await?;

    let outcome = backend
        .payments()
        .process(&order.id, request.method, request.card.as_ref())
        .await?;

    if !outcome.success {
        warn!(order_id = %order.id, reason = %outcome.message, "Payment declined, cart kept");
        return Err(ApiError::payment_declined(outcome.message));
    }

    // Only a confirmed payment clears the cart.
    cart.with_cart_mut(|c| c.clear());

    let transaction_id = outcome.transaction_id.unwrap_or_default();
    info!(
        order_id = %order.id,
        transaction_id = %transaction_id,
        total_cents = order.total_cents,
        "Order placed and paid"
    );

    Ok(PlaceOrderResponse {
        order,
        transaction_id,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use foodfast_api::payments::DECLINE_CARD_NUMBER;
    use foodfast_core::types::OrderStatus;

    fn delivery() -> DeliveryDetails {
        DeliveryDetails {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: Some("NY".to_string()),
            zip_code: "10001".to_string(),
            phone: "(555) 123-4567".to_string(),
        }
    }

    fn card(number: &str) -> CardDetails {
        CardDetails {
            card_number: number.to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            card_name: "John Doe".to_string(),
        }
    }

    async fn filled_cart(state: &AppState) {
        add_to_cart(&state.backend, &state.cart, "1", Some(2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_quote_matches_reference_pricing() {
        let state = AppState::for_tests();
        filled_cart(&state).await;

        let totals = get_checkout_quote(&state.cart, &state.config);
        assert_eq!(totals.subtotal_cents, 3798);
        assert_eq!(totals.delivery_fee_cents, 499);
        assert_eq!(totals.tax_cents, 304);
        assert_eq!(totals.total_cents, 4601);
    }

    #[tokio::test]
    async fn test_place_order_success_clears_cart() {
        let state = AppState::for_tests();
        filled_cart(&state).await;

        let response = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CashOnDelivery,
                card: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.order.status, OrderStatus::Placed);
        assert_eq!(response.order.total_cents, 4601);
        assert_eq!(response.transaction_id, "txn_0002"); // 0001 was the order id
        assert!(state.cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_cart_fails_validation_and_creates_nothing() {
        let state = AppState::for_tests();

        let err = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CashOnDelivery,
                card: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.backend.orders().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_card_fields_fail_before_any_call() {
        let state = AppState::for_tests();
        filled_cart(&state).await;

        let err = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CreditCard,
                card: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.backend.orders().list().await.unwrap().is_empty());
        assert!(!state.cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_declined_card_keeps_cart_and_order() {
        let state = AppState::for_tests();
        filled_cart(&state).await;

        let err = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CreditCard,
                card: Some(card(DECLINE_CARD_NUMBER)),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::PaymentDeclined);
        assert_eq!(
            err.message,
            "Payment declined. Please try a different card."
        );

        // the order was created and stays placed
        let orders = state.backend.orders().list().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Placed);

        // the cart was NOT cleared; retry with cash succeeds
        assert!(!state.cart.with_cart(|c| c.is_empty()));
        let retry = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CashOnDelivery,
                card: None,
            },
        )
        .await
        .unwrap();
        assert!(state.cart.with_cart(|c| c.is_empty()));
        assert_ne!(retry.order.id, orders[0].id);
    }

    #[tokio::test]
    async fn test_offline_backend_is_transport_error() {
        let state = AppState::for_tests();
        filled_cart(&state).await;
        state.backend.set_offline(true);

        let err = place_order(
            &state.backend,
            &state.cart,
            &state.config,
            "1",
            CheckoutRequest {
                delivery: delivery(),
                method: PaymentMethod::CashOnDelivery,
                card: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::TransportError);
        assert!(!state.cart.with_cart(|c| c.is_empty()));
    }
}
