use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::listing::{pair_with_products, unique_product_ids};
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::services::CatalogService;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::{CheckoutView, summarize};
use crate::domain::checkout::use_cases::view::ViewCheckoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::storefront::settings::StorefrontSettings;

pub struct ViewCheckoutUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn CatalogService>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewCheckoutUseCase for ViewCheckoutUseCaseImpl {
    async fn execute(&self) -> Result<CheckoutView, CheckoutError> {
        self.logger.info("Opening checkout");

        let entries = self.cart_repository.get_all().await?;
        if entries.is_empty() {
            self.logger.info("Checkout requested with an empty cart");
            return Ok(CheckoutView::EmptyCart);
        }

        let ids = unique_product_ids(&entries);
        let products = self.catalog.fetch_by_product_ids(&ids).await?;

        // Every entry is billed once, so repeated rows count as quantity.
        let lines = pair_with_products(entries, &products);
        let unresolved_entries = lines.iter().filter(|l| l.product.is_none()).count();
        let billed: Vec<_> = lines.into_iter().filter_map(|l| l.product).collect();

        let Some(mut summary) = summarize(billed, self.settings.shipping_fee)? else {
            self.logger.warn(&format!(
                "None of the {} cart entries resolved to a product",
                unresolved_entries
            ));
            return Ok(CheckoutView::EmptyCart);
        };
        summary.unresolved_entries = unresolved_entries;

        self.logger.info(&format!(
            "Checkout total: {} ({} items + {} shipping)",
            summary.total_price,
            summary.products.len(),
            summary.shipping_fee
        ));
        Ok(CheckoutView::Ready(summary))
    }
}
