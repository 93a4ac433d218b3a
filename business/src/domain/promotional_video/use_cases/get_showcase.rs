use async_trait::async_trait;

use crate::domain::promotional_video::errors::PromotionalVideoError;
use crate::domain::promotional_video::showcase::Showcase;

#[async_trait]
pub trait GetShowcaseUseCase: Send + Sync {
    async fn execute(&self) -> Result<Showcase, PromotionalVideoError>;
}
