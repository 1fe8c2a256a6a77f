//! # Checkout Module
//!
//! Pricing and order-draft construction: the pure half of checkout.
//!
//! ## Checkout Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Pipeline                                   │
//! │                                                                         │
//! │  Cart snapshot + delivery form + payment selection                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_order_draft() ◄── THIS MODULE (pure, synchronous)               │
//! │       │                                                                 │
//! │       ├── empty cart?            → ValidationError::EmptyCart          │
//! │       ├── delivery field blank?  → ValidationError::Required           │
//! │       ├── card fields missing?   → ValidationError::Required           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderDraft { items, subtotal, fee, tax, total, address }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderService::create → PaymentGateway::process   (foodfast-api)       │
//! │       │                                                                 │
//! │       └── only a SUCCESSFUL payment clears the cart                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CardDetails, DeliveryDetails, OrderDraft, PaymentMethod, TaxRate};
use crate::validation::{validate_card_details, validate_delivery_details};
use crate::{DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Pricing Configuration
// =============================================================================

/// The two knobs of checkout pricing.
///
/// One flat delivery fee and one tax rate, configured once per deployment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Flat delivery fee in cents.
    pub delivery_fee_cents: i64,

    /// Tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            delivery_fee_cents: DEFAULT_DELIVERY_FEE_CENTS,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl PricingConfig {
    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The priced breakdown of a cart at checkout.
///
/// `total = subtotal + delivery fee + tax`, all in exact cents. Tax is
/// rounded to the nearest cent before entering the sum, so the displayed
/// lines always add up to the displayed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl OrderTotals {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Prices a cart snapshot.
///
/// Pure and recomputed on every call; the cart itself stores no totals.
pub fn quote(cart: &Cart, pricing: &PricingConfig) -> OrderTotals {
    let subtotal = cart.subtotal();
    let tax = subtotal.calculate_tax(pricing.tax_rate());
    let fee = Money::from_cents(pricing.delivery_fee_cents);

    OrderTotals {
        subtotal_cents: subtotal.cents(),
        delivery_fee_cents: fee.cents(),
        tax_cents: tax.cents(),
        total_cents: (subtotal + fee + tax).cents(),
    }
}

// =============================================================================
// Order Draft Construction
// =============================================================================

/// Builds an order draft from a cart snapshot, ready for submission.
///
/// ## Validation
/// - The cart must be non-empty
/// - All required delivery fields must be filled
/// - `credit-card` checkouts must carry complete card details
///
/// The card details themselves never end up on the draft; they go to the
/// payment gateway separately.
pub fn build_order_draft(
    cart: &Cart,
    user_id: &str,
    delivery: &DeliveryDetails,
    method: PaymentMethod,
    card: Option<&CardDetails>,
    pricing: &PricingConfig,
) -> Result<OrderDraft, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    validate_delivery_details(delivery)?;

    if method.requires_card() {
        validate_card_details(card)?;
    }

    let totals = quote(cart, pricing);

    Ok(OrderDraft {
        user_id: user_id.to_string(),
        items: cart.items.clone(),
        subtotal_cents: totals.subtotal_cents,
        delivery_fee_cents: totals.delivery_fee_cents,
        tax_cents: totals.tax_cents,
        total_cents: totals.total_cents,
        delivery_address: delivery.to_address(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

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

    fn card() -> CardDetails {
        CardDetails {
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            card_name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_quote_reference_scenario() {
        // 2 × $18.99 pizza, $4.99 fee, 8% tax
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();

        let totals = quote(&cart, &PricingConfig::default());

        assert_eq!(totals.subtotal_cents, 3798); // $37.98
        assert_eq!(totals.delivery_fee_cents, 499); // $4.99
        assert_eq!(totals.tax_cents, 304); // $3.0384 → $3.04
        assert_eq!(totals.total_cents, 4601); // $46.01
    }

    #[test]
    fn test_quote_empty_cart_is_all_zero_but_fee() {
        let totals = quote(&Cart::new(), &PricingConfig::default());
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 499);
    }

    #[test]
    fn test_draft_empty_cart_rejected() {
        let err = build_order_draft(
            &Cart::new(),
            "1",
            &delivery(),
            PaymentMethod::CashOnDelivery,
            None,
            &PricingConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ValidationError::EmptyCart));
    }

    #[test]
    fn test_draft_missing_delivery_field_rejected() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 1).unwrap();

        let mut d = delivery();
        d.city = String::new();

        let err = build_order_draft(
            &cart,
            "1",
            &d,
            PaymentMethod::CashOnDelivery,
            None,
            &PricingConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "city is required");
    }

    #[test]
    fn test_draft_credit_card_requires_card_fields() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 1).unwrap();
        let pricing = PricingConfig::default();

        // no card at all
        assert!(build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::CreditCard,
            None,
            &pricing
        )
        .is_err());

        // incomplete card
        let mut c = card();
        c.expiry_date = String::new();
        assert!(build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::CreditCard,
            Some(&c),
            &pricing
        )
        .is_err());

        // complete card
        assert!(build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::CreditCard,
            Some(&card()),
            &pricing
        )
        .is_ok());
    }

    #[test]
    fn test_draft_non_card_methods_ignore_card() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 1).unwrap();
        let pricing = PricingConfig::default();

        assert!(build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::Paypal,
            None,
            &pricing
        )
        .is_ok());
        assert!(build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::CashOnDelivery,
            None,
            &pricing
        )
        .is_ok());
    }

    #[test]
    fn test_draft_carries_snapshot_and_totals() {
        let mut cart = Cart::new();
        cart.add(&product("1", 1899), 2).unwrap();
        cart.add(&product("4", 899), 1).unwrap();

        let draft = build_order_draft(
            &cart,
            "1",
            &delivery(),
            PaymentMethod::CashOnDelivery,
            None,
            &PricingConfig::default(),
        )
        .unwrap();

        assert_eq!(draft.user_id, "1");
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.subtotal_cents, 4697);
        // tax on $46.97 at 8% = $3.7576 → $3.76
        assert_eq!(draft.tax_cents, 376);
        assert_eq!(draft.total_cents, 4697 + 499 + 376);
        assert_eq!(draft.delivery_address.street, "123 Main St");
    }
}
