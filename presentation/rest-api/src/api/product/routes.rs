use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shared::value_objects::ProductId;
use business::domain::shop::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use business::domain::shop::use_cases::browse::{BrowseShopParams, BrowseShopUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{AddToCartRequest, ShopListingResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    browse_use_case: Arc<dyn BrowseShopUseCase>,
    add_to_cart_use_case: Arc<dyn AddToCartUseCase>,
}

impl ProductApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseShopUseCase>,
        add_to_cart_use_case: Arc<dyn AddToCartUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            add_to_cart_use_case,
        }
    }
}

/// Shop browsing API
///
/// Decorated product listings of a shop and adding products to the cart.
#[OpenApi]
impl ProductApi {
    /// Browse a shop
    ///
    /// Lists the products of `shop_code`, or of the default shop when it is
    /// absent or blank, with star ratings and display weights.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn browse(&self, shop_code: Query<Option<String>>) -> ShopListingApiResponse {
        let params = BrowseShopParams {
            shop_code: shop_code.0,
        };

        match self.browse_use_case.execute(params).await {
            Ok(listing) => ShopListingApiResponse::Ok(Json(listing.into())),
            Err(err) => ShopListingApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Add a product to the cart
    ///
    /// Saves one cart entry for the product and returns the same listing as
    /// the browse endpoint, so the user keeps browsing.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn add_to_cart(
        &self,
        shop_code: Query<Option<String>>,
        body: Json<AddToCartRequest>,
    ) -> ShopListingApiResponse {
        let params = AddToCartParams {
            product_id: ProductId::new(body.0.product_id),
            shop_code: shop_code.0,
        };

        match self.add_to_cart_use_case.execute(params).await {
            Ok(listing) => ShopListingApiResponse::Ok(Json(listing.into())),
            Err(err) => ShopListingApiResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShopListingApiResponse {
    #[oai(status = 200)]
    Ok(Json<ShopListingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ShopListingApiResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            502 => Self::BadGateway(json),
            _ => Self::InternalError(json),
        }
    }
}
