use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CartError::ProductIdEmpty => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", "cart.product_id_empty"),
            ),
            CartError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "cart.not_found"),
            ),
            CartError::Catalog(err) => err.into_error_response(),
            CartError::Repository(_) => repository_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::errors::CatalogError;

    #[test]
    fn should_map_missing_entry_to_not_found() {
        let (status, json) = CartError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "cart.not_found");
    }

    #[test]
    fn should_map_catalog_failure_to_bad_gateway() {
        let (status, json) =
            CartError::Catalog(CatalogError::InvalidResponse).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "catalog.invalid_response");
    }
}
