use poem_openapi::Object;

use business::domain::catalog::model::Product;
use business::domain::shop::decoration::{DecoratedProduct, ShopListing};

/// Product as returned by the catalog.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog product identifier
    pub product_id: String,
    pub item_name: String,
    /// Price in the smallest currency unit
    pub item_price: i64,
    /// Average review score, 0 to 5
    pub review_average: f64,
    pub medium_image_urls: Vec<String>,
    pub item_code: String,
    pub shop_code: String,
    /// Product page on the catalog site
    #[oai(skip_serializing_if_is_none)]
    pub item_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id.to_string(),
            item_name: product.item_name,
            item_price: product.item_price,
            review_average: product.review_average,
            medium_image_urls: product.medium_image_urls,
            item_code: product.item_code,
            shop_code: product.shop_code,
            item_url: product.item_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DecoratedProductResponse {
    pub product: ProductResponse,
    /// One element per star to render
    pub stars: Vec<u32>,
    /// Cosmetic layout weight in [0, 1]; the first product is always 1
    pub display_weight: f64,
}

impl From<DecoratedProduct> for DecoratedProductResponse {
    fn from(decorated: DecoratedProduct) -> Self {
        Self {
            product: decorated.product.into(),
            stars: decorated.stars,
            display_weight: decorated.display_weight,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShopListingResponse {
    /// Shop the products belong to
    pub shop_code: String,
    pub products: Vec<DecoratedProductResponse>,
    /// Layout weights, one per product
    pub display_weights: Vec<f64>,
}

impl From<ShopListing> for ShopListingResponse {
    fn from(listing: ShopListing) -> Self {
        Self {
            shop_code: listing.shop_code,
            products: listing.products.into_iter().map(Into::into).collect(),
            display_weights: listing.display_weights,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Catalog product identifier (cannot be empty)
    pub product_id: String,
}
