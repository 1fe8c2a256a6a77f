//! # Domain Types
//!
//! Core domain types used throughout FoodFast.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  user_id        │   │  name           │       │
//! │  │  price_cents    │   │  items          │   │  email          │       │
//! │  │  category       │   │  totals, status │   │  avatar         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   OrderStatus   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Placed         │   │  CreditCard     │       │
//! │  │  800 = 8%       │   │  Preparing      │   │  Paypal         │       │
//! │  └─────────────────┘   │  OutForDelivery │   │  CashOnDelivery │       │
//! │                        │  Delivered      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's default rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the menu.
///
/// Immutable reference data: created by the catalog, never mutated by the
/// cart or order flow. Carts and orders hold frozen snapshots of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the menu and on the order.
    pub name: String,

    /// Short marketing description.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image reference (path served by the frontend).
    pub image: String,

    /// Menu category ("Pizza", "Burger", "Appetizer", "Drinks").
    pub category: String,

    /// Average customer rating (display only, never money math).
    pub rating: f64,

    /// Preparation time label ("25-30 min").
    pub prep_time: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order, advancing monotonically.
///
/// ## Ordering
/// `Placed < Preparing < OutForDelivery < Delivered`. The derived `Ord`
/// is what makes the timeline projection and the no-regression rule cheap
/// comparisons instead of match tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order confirmed, waiting for the kitchen.
    Placed,
    /// Kitchen is preparing the order.
    Preparing,
    /// Driver is on the way.
    OutForDelivery,
    /// Order handed to the customer.
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order. The timeline projection walks this.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// The wire name of the status (kebab-case, matches serde).
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Placed
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Card payment, requires [`CardDetails`].
    CreditCard,
    /// External wallet, no card fields needed.
    Paypal,
    /// Pay the driver at the door.
    CashOnDelivery,
}

impl PaymentMethod {
    /// Whether this method needs card fields at checkout.
    pub const fn requires_card(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard)
    }
}

// =============================================================================
// Card Details
// =============================================================================

/// Card fields collected at checkout. Only required for
/// [`PaymentMethod::CreditCard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    /// "MM/YY"
    pub expiry_date: String,
    pub cvv: String,
    /// Name on card.
    pub card_name: String,
}

// =============================================================================
// Delivery
// =============================================================================

/// The delivery form filled at checkout.
///
/// `state` is the one optional field; everything else is required and
/// validated before an order draft is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: String,
    pub phone: String,
}

impl DeliveryDetails {
    /// Projects the form into the address snapshot stored on the order.
    pub fn to_address(&self) -> DeliveryAddress {
        DeliveryAddress {
            street: self.address.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
        }
    }
}

/// The address snapshot frozen onto an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Uses the snapshot pattern: `items` freeze the cart lines (product data
/// included) at checkout time, and the totals are computed once and stored.
/// Immutable after creation except for `status`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// Cart lines frozen at checkout time.
    pub items: Vec<CartItem>,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub delivery_address: DeliveryAddress,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Advances the order status.
    ///
    /// The status machine is monotonic: `Placed → Preparing →
    /// OutForDelivery → Delivered`. Moving backward (or "advancing" to the
    /// current status) is rejected.
    pub fn advance_status(&mut self, next: OrderStatus) -> Result<(), CoreError> {
        if next <= self.status {
            return Err(CoreError::StatusRegression {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// An order as submitted for creation.
///
/// The backend assigns `id`, `status` and `created_at`; everything else is
/// computed at checkout and carried over verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub delivery_address: DeliveryAddress,
}

// =============================================================================
// User
// =============================================================================

/// A customer account (mocked, no credentials stored here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
