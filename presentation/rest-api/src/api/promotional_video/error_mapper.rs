use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::promotional_video::errors::PromotionalVideoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, repository_error_response};

impl IntoErrorResponse for PromotionalVideoError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            PromotionalVideoError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "promotional_video.not_found"),
            ),
            PromotionalVideoError::Repository(_) => repository_error_response(),
        }
    }
}
