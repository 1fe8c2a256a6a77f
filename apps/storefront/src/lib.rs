//! # FoodFast Storefront Library
//!
//! The storefront session: state, commands and the scripted demo run.
//!
//! ## Module Organization
//! ```text
//! foodfast_storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup & demo session)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (backend + cart + config)
//! │   ├── cart.rs     ◄─── Cart state + storage collaborator
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Menu search/lookup commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Quote and place_order
//! │   ├── order.rs    ◄─── History and tracking timeline
//! │   └── profile.rs  ◄─── Login, register, profile
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::{ApiError, ErrorCode};
use state::{AppState, ConfigState};

use foodfast_api::payments::DECLINE_CARD_NUMBER;
use foodfast_api::users::{DEMO_EMAIL, DEMO_PASSWORD};
use foodfast_core::types::{CardDetails, DeliveryDetails, OrderStatus, PaymentMethod};

/// Runs the scripted demo session.
///
/// ## Session Script
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Build Session State ──────────────────────────────────────────────► │
/// │     • ConfigState from environment (FOODFAST_*)                         │
/// │     • Mocked backend + in-memory cart storage                           │
/// │                                                                         │
/// │  3. Walk the Customer Journey ────────────────────────────────────────► │
/// │     • Login with the demo account                                       │
/// │     • Browse the menu, fill the cart                                    │
/// │     • Checkout with the decline card → payment refused, cart kept      │
/// │     • Retry with cash on delivery → order placed, cart cleared         │
/// │     • Kitchen/driver advance the status, timeline is projected         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting storefront demo session");
    let state = AppState::new(config);

    // Sign in with the demo account
    let user = commands::profile::login(&state.backend, DEMO_EMAIL, DEMO_PASSWORD).await?;
    info!(user = %user.name, "Signed in");

    // Browse the menu
    let pizzas =
        commands::catalog::search_products(&state.backend, Some("pizza"), None).await?;
    for p in &pizzas {
        info!(
            "  {} - {} ({} ★, {})",
            p.name,
            state.config.format_currency(p.price_cents),
            p.rating,
            p.prep_time
        );
    }

    // Fill the cart: 2 × Margherita Pizza, 1 × Mango Smoothie
    commands::cart::add_to_cart(&state.backend, &state.cart, "1", Some(2)).await?;
    let cart = commands::cart::add_to_cart(&state.backend, &state.cart, "4", None).await?;
    info!(
        items = cart.summary.item_count,
        subtotal = %state.config.format_currency(cart.summary.subtotal_cents),
        "Cart filled"
    );

    let totals = commands::checkout::get_checkout_quote(&state.cart, &state.config);
    info!(
        subtotal = %state.config.format_currency(totals.subtotal_cents),
        delivery = %state.config.format_currency(totals.delivery_fee_cents),
        tax = %state.config.format_currency(totals.tax_cents),
        total = %state.config.format_currency(totals.total_cents),
        "Checkout quote"
    );

    let delivery = DeliveryDetails {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        address: "123 Main St".to_string(),
        city: "New York".to_string(),
        state: Some("NY".to_string()),
        zip_code: "10001".to_string(),
        phone: "(555) 123-4567".to_string(),
    };

    // First attempt: the well-known decline card
    let declined = commands::checkout::place_order(
        &state.backend,
        &state.cart,
        &state.config,
        &user.id,
        commands::checkout::CheckoutRequest {
            delivery: delivery.clone(),
            method: PaymentMethod::CreditCard,
            card: Some(CardDetails {
                card_number: DECLINE_CARD_NUMBER.to_string(),
                expiry_date: "12/27".to_string(),
                cvv: "123".to_string(),
                card_name: "John Doe".to_string(),
            }),
        },
    )
    .await;

    match declined {
        Err(e) if e.code == ErrorCode::PaymentDeclined => {
            warn!("First attempt: {}", e.message);
            let kept = state.cart.with_cart(|c| c.item_count());
            info!(items = kept, "Cart kept for retry");
        }
        Err(e) => return Err(e),
        Ok(_) => warn!("Decline card unexpectedly accepted"),
    }

    // Retry with cash on delivery
    let placed = commands::checkout::place_order(
        &state.backend,
        &state.cart,
        &state.config,
        &user.id,
        commands::checkout::CheckoutRequest {
            delivery,
            method: PaymentMethod::CashOnDelivery,
            card: None,
        },
    )
    .await?;
    info!(
        order_id = %placed.order.id,
        total = %state.config.format_currency(placed.order.total_cents),
        "Order placed"
    );

    // The kitchen and the driver make progress
    state
        .backend
        .orders()
        .advance_status(&placed.order.id, OrderStatus::Preparing)
        .await?;
    state
        .backend
        .orders()
        .advance_status(&placed.order.id, OrderStatus::OutForDelivery)
        .await?;

    // Project the tracking timeline
    let steps = commands::order::get_order_timeline(&state.backend, &placed.order.id).await?;
    for step in &steps {
        let marker = if step.current {
            "◉"
        } else if step.completed {
            "●"
        } else {
            "○"
        };
        info!("  {} {} - {} ({})", marker, step.title, step.description, step.timestamp);
    }

    info!("Demo session complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=foodfast=trace` - Show trace for foodfast crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foodfast=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
