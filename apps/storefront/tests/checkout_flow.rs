//! End-to-end walk through the customer journey against the mocked
//! backend: browse, fill the cart, get declined, retry, track the order.

use foodfast_api::payments::DECLINE_CARD_NUMBER;
use foodfast_api::users::{DEMO_EMAIL, DEMO_PASSWORD};
use foodfast_core::types::{CardDetails, DeliveryDetails, OrderStatus, PaymentMethod};
use foodfast_storefront::commands::checkout::CheckoutRequest;
use foodfast_storefront::commands::{cart, catalog, checkout, order, profile};
use foodfast_storefront::error::ErrorCode;
use foodfast_storefront::state::AppState;

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

fn decline_card() -> CardDetails {
    CardDetails {
        card_number: DECLINE_CARD_NUMBER.to_string(),
        expiry_date: "12/27".to_string(),
        cvv: "123".to_string(),
        card_name: "John Doe".to_string(),
    }
}

#[tokio::test]
async fn full_customer_journey() {
    let state = AppState::for_tests();

    // Sign in
    let user = profile::login(&state.backend, DEMO_EMAIL, DEMO_PASSWORD)
        .await
        .unwrap();
    assert_eq!(user.id, "1");

    // Browse the menu and pick from the results
    let pizzas = catalog::search_products(&state.backend, Some("pizza"), None)
        .await
        .unwrap();
    assert_eq!(pizzas.len(), 2);
    let margherita = &pizzas[0];

    // 2 × Margherita Pizza + 1 × Mango Smoothie
    cart::add_to_cart(&state.backend, &state.cart, &margherita.id, Some(2))
        .await
        .unwrap();
    let response = cart::add_to_cart(&state.backend, &state.cart, "4", None)
        .await
        .unwrap();
    assert_eq!(response.summary.item_count, 3);
    assert_eq!(response.summary.subtotal_cents, 4697);

    // The summary panel quote: $46.97 + $4.99 + 8% tax
    let totals = checkout::get_checkout_quote(&state.cart, &state.config);
    assert_eq!(totals.tax_cents, 376);
    assert_eq!(totals.total_cents, 4697 + 499 + 376);

    // First payment attempt is declined; cart must survive
    let err = checkout::place_order(
        &state.backend,
        &state.cart,
        &state.config,
        &user.id,
        CheckoutRequest {
            delivery: delivery(),
            method: PaymentMethod::CreditCard,
            card: Some(decline_card()),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::PaymentDeclined);
    assert_eq!(state.cart.with_cart(|c| c.item_count()), 3);

    // Retry with cash on delivery; this clears the cart
    let placed = checkout::place_order(
        &state.backend,
        &state.cart,
        &state.config,
        &user.id,
        CheckoutRequest {
            delivery: delivery(),
            method: PaymentMethod::CashOnDelivery,
            card: None,
        },
    )
    .await
    .unwrap();
    assert!(state.cart.with_cart(|c| c.is_empty()));
    assert_eq!(placed.order.status, OrderStatus::Placed);
    assert_eq!(placed.order.subtotal_cents, 4697);
    assert_eq!(placed.order.delivery_address.city, "New York");

    // Both attempts created orders; the declined one is still just placed
    let history = order::list_orders(&state.backend).await.unwrap();
    assert_eq!(history.len(), 2);

    // Kitchen and driver advance the paid order
    state
        .backend
        .orders()
        .advance_status(&placed.order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    state
        .backend
        .orders()
        .advance_status(&placed.order.id, OrderStatus::OutForDelivery)
        .await
        .unwrap();

    // Tracking page projection
    let steps = order::get_order_timeline(&state.backend, &placed.order.id)
        .await
        .unwrap();
    let flags: Vec<(bool, bool)> = steps.iter().map(|s| (s.completed, s.current)).collect();
    assert_eq!(
        flags,
        vec![(true, false), (true, false), (true, true), (false, false)]
    );
}
