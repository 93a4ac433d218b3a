use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::shop::decoration::ShopListing;
use crate::domain::shop::errors::ShopError;

pub struct AddToCartParams {
    pub product_id: ProductId,
    pub shop_code: Option<String>,
}

/// Adds a product to the cart and returns the listing the user was browsing.
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<ShopListing, ShopError>;
}
