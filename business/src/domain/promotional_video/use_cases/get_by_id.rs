use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::promotional_video::errors::PromotionalVideoError;
use crate::domain::promotional_video::model::PromotionalVideo;

pub struct GetPromotionalVideoByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetPromotionalVideoByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetPromotionalVideoByIdParams,
    ) -> Result<PromotionalVideo, PromotionalVideoError>;
}
