use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Promotional video of a shop. Managed by an external content process.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionalVideo {
    pub id: Uuid,
    pub shop_code: String,
    pub title: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
}

impl PromotionalVideo {
    pub fn from_repository(
        id: Uuid,
        shop_code: String,
        title: String,
        video_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shop_code,
            title,
            video_url,
            created_at,
        }
    }
}
