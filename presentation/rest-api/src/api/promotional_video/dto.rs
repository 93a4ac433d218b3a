use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::promotional_video::model::PromotionalVideo;
use business::domain::promotional_video::showcase::{Showcase, ShopStory};

#[derive(Debug, Clone, Object)]
pub struct ShopStoryResponse {
    pub promotional_video_id: String,
    /// Display image of the shop
    pub image_url: String,
    pub shop_code: String,
}

impl From<ShopStory> for ShopStoryResponse {
    fn from(story: ShopStory) -> Self {
        Self {
            promotional_video_id: story.promotional_video_id.to_string(),
            image_url: story.image_url,
            shop_code: story.shop_code,
        }
    }
}

/// Landing page: shop stories and the cart badge.
#[derive(Debug, Clone, Object)]
pub struct ShowcaseResponse {
    pub shop_stories: Vec<ShopStoryResponse>,
    /// Number of entries currently in the cart
    pub cart_items_len: u64,
}

impl From<Showcase> for ShowcaseResponse {
    fn from(showcase: Showcase) -> Self {
        Self {
            shop_stories: showcase.shop_stories.into_iter().map(Into::into).collect(),
            cart_items_len: showcase.cart_items_len,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PromotionalVideoResponse {
    pub id: String,
    pub shop_code: String,
    pub title: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<PromotionalVideo> for PromotionalVideoResponse {
    fn from(video: PromotionalVideo) -> Self {
        Self {
            id: video.id.to_string(),
            shop_code: video.shop_code,
            title: video.title,
            video_url: video.video_url,
            created_at: video.created_at,
        }
    }
}
