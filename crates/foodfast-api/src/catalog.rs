//! # Product Catalog
//!
//! The demo menu and its search/lookup operations.
//!
//! ## How Search Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types: "pizza"            Category chip: "Drinks"                 │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  name OR description contains   category equals (the "All" chip        │
//! │  the term, case-insensitive     disables the filter)                   │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │  Results keep menu order: [Margherita Pizza, Pepperoni Supreme Pizza]  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Eight fixed products, never mutated. A linear scan over eight items is
//! the whole search engine.

use std::sync::Arc;

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::Shared;
use foodfast_core::types::Product;

/// Service handle for menu browsing.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    shared: Arc<Shared>,
}

impl ProductCatalog {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        ProductCatalog { shared }
    }

    /// Searches the menu.
    ///
    /// ## Arguments
    /// * `search` - Optional term matched against name and description,
    ///   case-insensitive
    /// * `category` - Optional category filter; `"All"` (any case) means
    ///   no filter
    ///
    /// ## Returns
    /// Matching products in menu order. An empty result is not an error.
    pub async fn search(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> ServiceResult<Vec<Product>> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.catalog_list)
            .await;

        debug!(?search, ?category, "Searching products");

        let term = search.map(str::to_lowercase);
        let products: Vec<Product> = self
            .shared
            .menu
            .iter()
            .filter(|p| match &term {
                Some(t) => {
                    p.name.to_lowercase().contains(t) || p.description.to_lowercase().contains(t)
                }
                None => true,
            })
            .filter(|p| match category {
                Some(c) if !c.eq_ignore_ascii_case("All") => p.category == c,
                _ => true,
            })
            .cloned()
            .collect();

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Looks up a single product by id.
    pub async fn get(&self, id: &str) -> ServiceResult<Product> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.catalog_get)
            .await;

        debug!(product_id = %id, "Fetching product");

        self.shared
            .menu
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }
}

// =============================================================================
// Demo Menu
// =============================================================================

/// The eight demo products. Prices in cents, images as frontend paths.
pub(crate) fn demo_menu() -> Vec<Product> {
    fn item(
        id: &str,
        name: &str,
        description: &str,
        price_cents: i64,
        image: &str,
        category: &str,
        rating: f64,
        prep_time: &str,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
            image: image.to_string(),
            category: category.to_string(),
            rating,
            prep_time: prep_time.to_string(),
        }
    }

    vec![
        item(
            "1",
            "Margherita Pizza",
            "Fresh basil, mozzarella, and tomato sauce on crispy crust",
            1899,
            "/margherita-pizza-with-fresh-basil-and-mozzarella.jpg",
            "Pizza",
            4.8,
            "25-30 min",
        ),
        item(
            "2",
            "Gourmet Beef Burger",
            "Premium beef patty with truffle aioli and caramelized onions",
            2499,
            "/gourmet-beef-burger-with-truffle-aioli-and-caramel.jpg",
            "Burger",
            4.9,
            "15-20 min",
        ),
        item(
            "3",
            "Buffalo Chicken Wings",
            "Spicy buffalo wings served with blue cheese dip",
            1699,
            "/spicy-buffalo-chicken-wings-with-blue-cheese-dip.jpg",
            "Appetizer",
            4.7,
            "20-25 min",
        ),
        item(
            "4",
            "Fresh Mango Smoothie",
            "Tropical mango smoothie with coconut milk and lime",
            899,
            "/fresh-mango-smoothie-with-coconut-milk-and-lime.jpg",
            "Drinks",
            4.6,
            "5-10 min",
        ),
        item(
            "5",
            "Pepperoni Supreme Pizza",
            "Loaded with pepperoni, sausage, and bell peppers",
            2299,
            "/pepperoni-supreme-pizza-with-sausage-and-bell-pepp.jpg",
            "Pizza",
            4.8,
            "25-30 min",
        ),
        item(
            "6",
            "Crispy Fish Burger",
            "Beer-battered fish with tartar sauce on brioche bun",
            1999,
            "/crispy-fish-burger-with-tartar-sauce-on-brioche-bu.jpg",
            "Burger",
            4.5,
            "18-22 min",
        ),
        item(
            "7",
            "Iced Coffee Frappe",
            "Rich espresso frappe with whipped cream",
            699,
            "/iced-coffee-frappe-with-whipped-cream-and-espresso.jpg",
            "Drinks",
            4.4,
            "5-8 min",
        ),
        item(
            "8",
            "Loaded Nachos",
            "Crispy nachos with cheese, jalapeños, and sour cream",
            1499,
            "/loaded-nachos-with-cheese-jalape-os-sour-cream-and.jpg",
            "Appetizer",
            4.6,
            "12-15 min",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
