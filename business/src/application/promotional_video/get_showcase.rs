use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::promotional_video::errors::PromotionalVideoError;
use crate::domain::promotional_video::repository::PromotionalVideoRepository;
use crate::domain::promotional_video::showcase::{Showcase, shop_stories};
use crate::domain::promotional_video::use_cases::get_showcase::GetShowcaseUseCase;
use crate::domain::storefront::settings::StorefrontSettings;

pub struct GetShowcaseUseCaseImpl {
    pub repository: Arc<dyn PromotionalVideoRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShowcaseUseCase for GetShowcaseUseCaseImpl {
    async fn execute(&self) -> Result<Showcase, PromotionalVideoError> {
        self.logger.info("Getting promotional video showcase");

        let videos = self.repository.get_all().await?;
        let shop_stories = shop_stories(&videos, &self.settings);
        let cart_items_len = self.cart_repository.count().await?;

        self.logger.info(&format!(
            "Showing {} of {} promotional videos",
            shop_stories.len(),
            videos.len()
        ));
        Ok(Showcase {
            shop_stories,
            cart_items_len,
        })
    }
}
