use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;

pub struct DeleteCartEntryParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteCartEntryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartEntryParams) -> Result<(), CartError>;
}
