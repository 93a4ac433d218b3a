use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::PromotionalVideo;

#[async_trait]
pub trait PromotionalVideoRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<PromotionalVideo>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<PromotionalVideo, RepositoryError>;
}
