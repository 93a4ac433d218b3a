use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::promotional_video::errors::PromotionalVideoError;
use crate::domain::promotional_video::model::PromotionalVideo;
use crate::domain::promotional_video::repository::PromotionalVideoRepository;
use crate::domain::promotional_video::use_cases::get_by_id::{
    GetPromotionalVideoByIdParams, GetPromotionalVideoByIdUseCase,
};

pub struct GetPromotionalVideoByIdUseCaseImpl {
    pub repository: Arc<dyn PromotionalVideoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPromotionalVideoByIdUseCase for GetPromotionalVideoByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetPromotionalVideoByIdParams,
    ) -> Result<PromotionalVideo, PromotionalVideoError> {
        self.logger
            .info(&format!("Getting promotional video: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PromotionalVideoError::NotFound,
                other => PromotionalVideoError::Repository(other),
            })
    }
}
