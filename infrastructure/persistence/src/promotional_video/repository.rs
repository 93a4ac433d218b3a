use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::promotional_video::model::PromotionalVideo;
use business::domain::promotional_video::repository::PromotionalVideoRepository;

use super::entity::PromotionalVideoEntity;

pub struct PromotionalVideoRepositoryPostgres {
    pool: PgPool,
}

impl PromotionalVideoRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionalVideoRepository for PromotionalVideoRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<PromotionalVideo>, RepositoryError> {
        let entities = sqlx::query_as::<_, PromotionalVideoEntity>(
            "SELECT id, shop_code, title, video_url, created_at FROM promotional_videos ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<PromotionalVideo, RepositoryError> {
        let entity = sqlx::query_as::<_, PromotionalVideoEntity>(
            "SELECT id, shop_code, title, video_url, created_at FROM promotional_videos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
