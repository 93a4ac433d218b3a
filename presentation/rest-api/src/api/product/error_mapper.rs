use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shop::errors::ShopError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for ShopError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ShopError::ProductIdEmpty => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "cart.product_id_empty"),
            ),
            ShopError::Catalog(err) => err.into_error_response(),
            ShopError::Repository(_) => repository_error_response(),
        }
    }
}
