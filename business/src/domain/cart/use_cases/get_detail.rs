use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::listing::CartEntryDetail;

pub struct GetCartEntryDetailParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCartEntryDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetCartEntryDetailParams)
    -> Result<CartEntryDetail, CartError>;
}
