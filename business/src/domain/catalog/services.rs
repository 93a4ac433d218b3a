use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CatalogError;
use super::model::Product;

/// Service port for the external product catalog.
///
/// All lookups are read-only. Unknown ids, shops or item codes simply yield
/// fewer (or no) products; only transport and upstream failures are errors.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Results follow the order of `ids` where possible; missing ids are absent.
    async fn fetch_by_product_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError>;

    async fn fetch_by_shop_code(&self, shop_code: &str) -> Result<Vec<Product>, CatalogError>;

    async fn fetch_by_item_code(&self, item_code: &str) -> Result<Vec<Product>, CatalogError>;
}
