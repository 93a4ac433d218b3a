use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::promotional_video::model::PromotionalVideo;

#[derive(Debug, FromRow)]
pub struct PromotionalVideoEntity {
    pub id: Uuid,
    pub shop_code: String,
    pub title: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

impl PromotionalVideoEntity {
    pub fn into_domain(self) -> PromotionalVideo {
        PromotionalVideo::from_repository(
            self.id,
            self.shop_code,
            self.title,
            self.video_url,
            self.created_at,
        )
    }
}
