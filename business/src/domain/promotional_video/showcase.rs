use uuid::Uuid;

use crate::domain::storefront::settings::StorefrontSettings;

use super::model::PromotionalVideo;

/// Shop tile linking to one promotional video.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopStory {
    pub promotional_video_id: Uuid,
    pub image_url: String,
    pub shop_code: String,
}

/// Landing page content: shop stories plus the cart badge count.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    pub shop_stories: Vec<ShopStory>,
    pub cart_items_len: u64,
}

/// Keeps only videos of shops with a known display image, in input order.
pub fn shop_stories(videos: &[PromotionalVideo], settings: &StorefrontSettings) -> Vec<ShopStory> {
    videos
        .iter()
        .filter_map(|video| {
            settings
                .shop_image_url(&video.shop_code)
                .map(|image_url| ShopStory {
                    promotional_video_id: video.id,
                    image_url: image_url.to_string(),
                    shop_code: video.shop_code.clone(),
                })
        })
        .collect()
}
