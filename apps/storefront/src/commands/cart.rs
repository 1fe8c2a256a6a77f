//! # Cart Commands
//!
//! Cart manipulation, in the shape a UI invokes it.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart       place_order                        │
//! │       │           update_cart_item  (checkout.rs)                      │
//! │       │           remove_from_cart       │                              │
//! │       │                                  │ payment success              │
//! │       └──────────────────────────────────┘                              │
//! │         (a DECLINED payment leaves the cart untouched)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;
use foodfast_api::Backend;
use foodfast_core::cart::{Cart, CartItem};

/// Cart summary figures for the badge and the cart page footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Distinct lines.
    pub line_count: usize,
    /// Total quantity across lines (the badge number).
    pub item_count: i64,
    /// Σ price × quantity in cents.
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

/// Cart response including items and summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            summary: CartSummary::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Looks the product up in the catalog (snapshot price at add time)
/// - Product already in cart: quantity increases
/// - Product not in cart: appended as new line
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1)
pub async fn add_to_cart(
    backend: &Backend,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity, "add_to_cart command");

    let product = backend.catalog().get(product_id).await?;

    cart.with_cart_mut(|c| {
        c.add(&product, quantity)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Product not in cart: no-op
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(product_id);
        CartResponse::from(&*c)
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User empties the cart manually
/// - After a successful payment (checkout.rs does this itself)
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
