use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::services::CatalogService;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::pricing::{OrderSummary, summarize};
use crate::domain::checkout::use_cases::view_one_click::{
    OneClickCheckoutParams, ViewOneClickCheckoutUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::storefront::settings::StorefrontSettings;

pub struct ViewOneClickCheckoutUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

/// Prices the products behind an item code. Shared by view and confirm.
pub(crate) async fn price_item_code(
    catalog: &dyn CatalogService,
    settings: &StorefrontSettings,
    item_code: &str,
) -> Result<OrderSummary, CheckoutError> {
    let item_code = item_code.trim();
    if item_code.is_empty() {
        return Err(CheckoutError::ItemCodeEmpty);
    }

    let products = catalog.fetch_by_item_code(item_code).await?;
    summarize(products, settings.shipping_fee)?.ok_or(CheckoutError::ItemNotFound)
}

#[async_trait]
impl ViewOneClickCheckoutUseCase for ViewOneClickCheckoutUseCaseImpl {
    async fn execute(
        &self,
        params: OneClickCheckoutParams,
    ) -> Result<OrderSummary, CheckoutError> {
        self.logger.info(&format!(
            "Opening one-click checkout for item: {}",
            params.item_code
        ));

        let summary =
            price_item_code(self.catalog.as_ref(), &self.settings, &params.item_code).await?;

        self.logger
            .info(&format!("One-click total: {}", summary.total_price));
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
    async fn should_price_single_item_with_shipping() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_item_code()
            .withf(|code| code == "grazia-doris:10000001")
            .times(1)
            .returning(|_| Ok(vec![product("A", 4980)]));

        let use_case = ViewOneClickCheckoutUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            settings: settings(),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(OneClickCheckoutParams {
                item_code: "grazia-doris:10000001".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(summary.order_total, 4980);
        assert_eq!(summary.total_price, 5280);
    }

    #[tokio::test]
    async fn should_reject_empty_item_code() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_fetch_by_item_code().never();

        let use_case = ViewOneClickCheckoutUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OneClickCheckoutParams {
                item_code: " ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::ItemCodeEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_unknown() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_item_code()
            .returning(|_| Ok(vec![]));

        let use_case = ViewOneClickCheckoutUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(OneClickCheckoutParams {
                item_code: "unknown:1".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::ItemNotFound));
    }
}
