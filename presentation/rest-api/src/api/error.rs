use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::catalog::errors::CatalogError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            CatalogError::Network => "catalog.network_error",
            CatalogError::Upstream { .. } => "catalog.upstream_error",
            CatalogError::InvalidResponse => "catalog.invalid_response",
        };

        (
            StatusCode::BAD_GATEWAY,
            ErrorResponse::new("CatalogUnavailable", message),
        )
    }
}

pub fn repository_error_response() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("InternalError", "repository.persistence"),
    )
}

pub fn invalid_id_response(message: &str) -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", message)
}
