use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::listing::{CartLine, pair_with_products, unique_product_ids};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::GetCartUseCase;
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CartLine>, CartError> {
        self.logger.info("Getting cart");

        let entries = self.repository.get_all().await?;
        if entries.is_empty() {
            self.logger.info("Cart is empty");
            return Ok(vec![]);
        }

        let ids = unique_product_ids(&entries);
        let products = self.catalog.fetch_by_product_ids(&ids).await?;
        let lines = pair_with_products(entries, &products);

        let orphaned = lines.iter().filter(|l| l.product.is_none()).count();
        if orphaned > 0 {
            self.logger.warn(&format!(
                "{} cart entries reference products missing from the catalog",
                orphaned
            ));
        }

        self.logger
            .info(&format!("Retrieved {} cart entries", lines.len()));
        Ok(lines)
    }
}
