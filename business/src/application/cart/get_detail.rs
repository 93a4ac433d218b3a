use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::listing::CartEntryDetail;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_detail::{
    GetCartEntryDetailParams, GetCartEntryDetailUseCase,
};
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartEntryDetailUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartEntryDetailUseCase for GetCartEntryDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetCartEntryDetailParams,
    ) -> Result<CartEntryDetail, CartError> {
        self.logger
            .info(&format!("Getting cart entry detail: {}", params.id));

        let entry = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        let product = self
            .catalog
            .fetch_by_product_ids(std::slice::from_ref(&entry.product_id))
            .await?
            .into_iter()
            .find(|p| p.product_id == entry.product_id);

        if product.is_none() {
            self.logger.warn(&format!(
                "Product {} of cart entry {} is no longer in the catalog",
                entry.product_id, entry.id
            ));
        }

        Ok(CartEntryDetail::new(entry, product))
    }
}
