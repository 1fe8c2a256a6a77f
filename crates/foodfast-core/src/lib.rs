//! # foodfast-core: Pure Business Logic for FoodFast
//!
//! This crate is the **heart** of the FoodFast storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FoodFast Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront UI (TypeScript)                     │   │
//! │  │    Menu ──► Cart ──► Checkout ──► Order Tracking ──► Profile   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands)                      │   │
//! │  │    search_products, add_to_cart, place_order, get_order, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ foodfast-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  money   │ │   cart   │ │ checkout/timeline│  │   │
//! │  │   │ Product  │ │  Money   │ │   Cart   │ │ pricing, draft,  │  │   │
//! │  │   │  Order   │ │ TaxRate  │ │ CartItem │ │ status steps     │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK READS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               foodfast-api (mocked services)                    │   │
//! │  │        Catalog, Orders, Payments, Users (in-memory)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, statuses, forms)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart and its line operations
//! - [`checkout`] - Pricing and order-draft construction
//! - [`timeline`] - Status → tracking-display projection
//! - [`error`] - Domain error types
//! - [`validation`] - Field and form validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, clock and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use foodfast_core::cart::Cart;
//! use foodfast_core::checkout::{quote, PricingConfig};
//! use foodfast_core::types::Product;
//!
//! let pizza = Product {
//!     id: "1".to_string(),
//!     name: "Margherita Pizza".to_string(),
//!     description: "Fresh basil, mozzarella, and tomato sauce".to_string(),
//!     price_cents: 1899,
//!     image: "/margherita.jpg".to_string(),
//!     category: "Pizza".to_string(),
//!     rating: 4.8,
//!     prep_time: "25-30 min".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&pizza, 2).unwrap();
//!
//! let totals = quote(&cart, &PricingConfig::default());
//! assert_eq!(totals.total_cents, 4601); // $37.98 + $4.99 + $3.04
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod timeline;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use foodfast_core::Money` instead of
// `use foodfast_core::money::Money`

pub use cart::{Cart, CartItem};
pub use checkout::{build_order_draft, quote, OrderTotals, PricingConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use timeline::{order_timeline, TimelineStep};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default flat delivery fee: $4.99.
///
/// ## Why a constant?
/// The storefront charges one flat fee regardless of distance or order size.
/// Deployments override it through configuration; this is the fallback.
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 499;

/// Default tax rate: 8% (800 basis points).
///
/// Applied to the cart subtotal only; the delivery fee is not taxed.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;
