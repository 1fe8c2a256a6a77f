//! # Cart Module
//!
//! The shopping cart: an ordered list of line items, unique by product.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  UI Action               Operation                Cart Change           │
//! │  ─────────               ─────────                ───────────           │
//! │                                                                         │
//! │  Click "Add" ──────────► add(product, qty) ─────► merge or append      │
//! │                                                                         │
//! │  Change quantity ──────► update_quantity() ─────► set exact / remove   │
//! │                                                                         │
//! │  Click "Remove" ───────► remove(product_id) ────► drop the line        │
//! │                                                                         │
//! │  Payment succeeds ─────► clear() ───────────────► empty cart           │
//! │                                                                         │
//! │  INVARIANT: at most one line per product id. Re-adding a product        │
//! │  merges quantities instead of duplicating the line.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `id` equals the product id; it doubles as the line key.
/// - `product` is a frozen snapshot taken when the line was created.
///   The cart (and later the order) displays consistent data even if the
///   catalog entry changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line key, equal to `product.id`.
    pub id: String,

    /// Product snapshot frozen at add time.
    pub product: Product,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a new line from a product snapshot and quantity.
    pub fn new(product: &Product, quantity: i64) -> Self {
        CartItem {
            id: product.id.clone(),
            product: product.clone(),
            quantity,
        }
    }

    /// Line total in cents (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges quantity)
/// - Quantity is always >= 1 (an update to <= 0 removes the line)
/// - Line order is insertion order (what the customer sees)
///
/// ## Concurrency
/// The cart itself is a plain value with synchronous operations. One session
/// owns one cart; if a host keeps several copies (multiple tabs), the last
/// write wins. There is no merge or lock discipline at this level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from previously persisted lines.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by `quantity`
    /// - Product not in cart: appended as a new line
    /// - `quantity <= 0` is rejected with a validation error
    ///
    /// No upper bound is enforced on quantities.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), ValidationError> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += quantity;
            return Ok(());
        }

        self.items.push(CartItem::new(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line to exactly `quantity` (not additive).
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - Product not in cart: no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line by product id. No error if the product is absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.id != product_id);
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Looks up a line by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal in cents: Σ price × quantity, exact integer arithmetic.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "test".to_string(),
            price_cents,
            image: format!("/product-{}.jpg", id),
            category: "Pizza".to_string(),
            rating: 4.8,
            prep_time: "25-30 min".to_string(),
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal_cents(), 3798);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let pizza = product("1", 1899);

        cart.add(&pizza, 2).unwrap();
        cart.add(&pizza, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // still one line
        assert_eq!(cart.get("1").unwrap().quantity, 5); // n + m
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add(&product("1", 1899), 0).is_err());
        assert!(cart.add(&product("1", 1899), -3).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_no_duplicate_lines_across_operations() {
        let mut cart = Cart::new();
        let pizza = product("1", 1899);
        let burger = product("2", 2499);

        cart.add(&pizza, 1).unwrap();
        cart.add(&burger, 1).unwrap();
        cart.update_quantity("1", 4);
        cart.add(&pizza, 2).unwrap();
        cart.remove("2");
        cart.add(&burger, 1).unwrap();

        let ids: Vec<&str> = cart.items.iter().map(|i| i.id.as_str()).collect();
        let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(cart.get("1").unwrap().quantity, 6);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();

        cart.update_quantity("1", 7);
        assert_eq!(cart.get("1").unwrap().quantity, 7); // not 2 + 7
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();

        cart.update_quantity("1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();

        cart.update_quantity("999", 5);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_absent_is_silent() {
        let mut cart = Cart::new();
        cart.remove("999"); // no panic, no error
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_and_item_count_are_exact() {
        // 2 × $18.99 + 1 × $8.99 = $46.97
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();
        cart.add(&product("4", 899), 1).unwrap();

        assert_eq!(cart.subtotal_cents(), 4697);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(format!("{}", cart.subtotal()), "$46.97");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_snapshot_is_frozen() {
        let mut cart = Cart::new();
        let mut pizza = product("1", 1899);
        cart.add(&pizza, 1).unwrap();

        // Catalog price changes after the item is in the cart
        pizza.price_cents = 2199;

        assert_eq!(cart.get("1").unwrap().product.price_cents, 1899);
    }
}
