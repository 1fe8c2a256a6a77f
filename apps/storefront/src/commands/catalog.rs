//! # Catalog Commands

use tracing::debug;

use crate::error::ApiError;
use foodfast_api::Backend;
use foodfast_core::types::Product;

/// Searches the menu.
///
/// ## Arguments
/// * `search` - Optional term matched against name and description
/// * `category` - Optional category; "All" means no filter
pub async fn search_products(
    backend: &Backend,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<Vec<Product>, ApiError> {
    debug!(?search, ?category, "search_products command");
    Ok(backend.catalog().search(search, category).await?)
}

/// Fetches a single product by id.
pub async fn get_product(backend: &Backend, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(backend.catalog().get(product_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_search_and_get() {
        let state = AppState::for_tests();

        let pizzas = search_products(&state.backend, Some("pizza"), None)
            .await
            .unwrap();
        assert_eq!(pizzas.len(), 2);

        let product = get_product(&state.backend, "2").await.unwrap();
        assert_eq!(product.name, "Gourmet Beef Burger");

        let err = get_product(&state.backend, "999").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
