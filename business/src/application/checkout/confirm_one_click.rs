use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::services::CatalogService;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::OrderSummary;
use crate::domain::checkout::use_cases::confirm_one_click::ConfirmOneClickCheckoutUseCase;
use crate::domain::checkout::use_cases::view_one_click::OneClickCheckoutParams;
use crate::domain::logger::Logger;
use crate::domain::storefront::settings::StorefrontSettings;

use super::view_one_click::price_item_code;

/// Has no access to the cart repository: one-click orders bypass the cart.
pub struct ConfirmOneClickCheckoutUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmOneClickCheckoutUseCase for ConfirmOneClickCheckoutUseCaseImpl {
    async fn execute(
        &self,
        params: OneClickCheckoutParams,
    ) -> Result<OrderSummary, CheckoutError> {
        self.logger.info(&format!(
            "Confirming one-click checkout for item: {}",
            params.item_code
        ));

        let summary =
            price_item_code(self.catalog.as_ref(), &self.settings, &params.item_code).await?;

        self.logger.info(&format!(
            "One-click order placed for {} ({} total)",
            params.item_code, summary.total_price
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::catalog::errors::CatalogError;
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn fetch_by_product_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError>;
            async fn fetch_by_shop_code(&self, shop_code: &str) -> Result<Vec<Product>, CatalogError>;
            async fn fetch_by_item_code(&self, item_code: &str) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn settings() -> Arc<StorefrontSettings> {
        Arc::new(StorefrontSettings {
            shipping_fee: 300,
            default_shop_code: "grazia-doris".to_string(),
            shop_image_urls: HashMap::new(),
        })
    }

    #[tokio::test]
    async fn should_confirm_single_item_order() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_item_code()
            .returning(|_| Ok(vec![product("A", 1000)]));

        let use_case = ConfirmOneClickCheckoutUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            settings: settings(),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(OneClickCheckoutParams {
                item_code: "shop:A".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(summary.total_price, 1300);
    }

    #[tokio::test]
    async fn should_surface_catalog_failure_on_confirm() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_item_code()
            .returning(|_| Err(CatalogError::Network));

        let use_case = ConfirmOneClickCheckoutUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OneClickCheckoutParams {
                item_code: "shop:A".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::Catalog(CatalogError::Network)
        ));
    }
}
