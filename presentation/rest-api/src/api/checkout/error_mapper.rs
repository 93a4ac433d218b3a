use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CheckoutError::ItemCodeEmpty => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "checkout.item_code_empty"),
            ),
            CheckoutError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "checkout.item_not_found"),
            ),
            CheckoutError::Catalog(err) => err.into_error_response(),
            CheckoutError::Repository(_) => repository_error_response(),
        }
    }
}
