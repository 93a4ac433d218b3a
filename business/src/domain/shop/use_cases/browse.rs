use async_trait::async_trait;

use crate::domain::shop::decoration::ShopListing;
use crate::domain::shop::errors::ShopError;

pub struct BrowseShopParams {
    /// Falls back to the configured default shop when `None` or blank.
    pub shop_code: Option<String>,
}

#[async_trait]
pub trait BrowseShopUseCase: Send + Sync {
    async fn execute(&self, params: BrowseShopParams) -> Result<ShopListing, ShopError>;
}
