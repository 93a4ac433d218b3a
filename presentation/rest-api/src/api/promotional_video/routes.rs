use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::promotional_video::use_cases::get_by_id::{
    GetPromotionalVideoByIdParams, GetPromotionalVideoByIdUseCase,
};
use business::domain::promotional_video::use_cases::get_showcase::GetShowcaseUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id_response};
use crate::api::promotional_video::dto::{PromotionalVideoResponse, ShowcaseResponse};
use crate::api::tags::ApiTags;

pub struct PromotionalVideoApi {
    get_showcase_use_case: Arc<dyn GetShowcaseUseCase>,
    get_by_id_use_case: Arc<dyn GetPromotionalVideoByIdUseCase>,
}

impl PromotionalVideoApi {
    pub fn new(
        get_showcase_use_case: Arc<dyn GetShowcaseUseCase>,
        get_by_id_use_case: Arc<dyn GetPromotionalVideoByIdUseCase>,
    ) -> Self {
        Self {
            get_showcase_use_case,
            get_by_id_use_case,
        }
    }
}

#[OpenApi]
impl PromotionalVideoApi {
    /// Promotional video showcase
    ///
    /// Shop stories for every video whose shop has a display image, plus the
    /// number of cart entries.
    #[oai(
        path = "/promotional-videos",
        method = "get",
        tag = "ApiTags::PromotionalVideos"
    )]
    async fn showcase(&self) -> GetShowcaseResponse {
        match self.get_showcase_use_case.execute().await {
            Ok(showcase) => GetShowcaseResponse::Ok(Json(showcase.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetShowcaseResponse::InternalError(json)
            }
        }
    }

    /// Get a promotional video
    #[oai(
        path = "/promotional-videos/:id",
        method = "get",
        tag = "ApiTags::PromotionalVideos"
    )]
    async fn get_by_id(&self, id: Path<String>) -> GetPromotionalVideoResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetPromotionalVideoResponse::BadRequest(invalid_id_response(
                "promotional_video.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetPromotionalVideoByIdParams { id })
            .await
        {
            Ok(video) => GetPromotionalVideoResponse::Ok(Json(video.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPromotionalVideoResponse::NotFound(json),
                    _ => GetPromotionalVideoResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShowcaseResponse {
    #[oai(status = 200)]
    Ok(Json<ShowcaseResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPromotionalVideoResponse {
    #[oai(status = 200)]
    Ok(Json<PromotionalVideoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
