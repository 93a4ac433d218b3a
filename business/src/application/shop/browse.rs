use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;
use crate::domain::shop::decoration::{ShopListing, decorate};
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::use_cases::browse::{BrowseShopParams, BrowseShopUseCase};
use crate::domain::shop::weights::WeightSource;
use crate::domain::storefront::settings::StorefrontSettings;

pub struct BrowseShopUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub weights: Arc<dyn WeightSource>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

/// Fetches and decorates the listing of a shop (or of the default shop).
pub(crate) async fn load_listing(
    catalog: &dyn CatalogService,
    weights: &dyn WeightSource,
    settings: &StorefrontSettings,
    shop_code: Option<&str>,
) -> Result<ShopListing, ShopError> {
    let shop_code = settings.resolve_shop_code(shop_code);
    let products = catalog.fetch_by_shop_code(&shop_code).await?;
    Ok(decorate(shop_code, products, weights))
}

#[async_trait]
impl BrowseShopUseCase for BrowseShopUseCaseImpl {
    async fn execute(&self, params: BrowseShopParams) -> Result<ShopListing, ShopError> {
        let listing = load_listing(
            self.catalog.as_ref(),
            self.weights.as_ref(),
            &self.settings,
            params.shop_code.as_deref(),
        )
        .await?;

        self.logger.info(&format!(
            "Listed {} products of shop {}",
            listing.products.len(),
            listing.shop_code
        ));
        Ok(listing)
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
    use crate::domain::shop::decoration::test_support::ScriptedWeights;
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
    async fn should_browse_default_shop_when_no_code_given() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .withf(|code| code == "grazia-doris")
            .times(1)
            .returning(|_| Ok(vec![product("A", 1000), product("B", 2000)]));

        let use_case = BrowseShopUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[0.4, 0.6])),
            settings: settings(),
            logger: mock_logger(),
        };

        let listing = use_case
            .execute(BrowseShopParams { shop_code: None })
            .await
            .unwrap();

        assert_eq!(listing.shop_code, "grazia-doris");
        assert_eq!(listing.products.len(), 2);
        assert_eq!(listing.products[0].display_weight, 1.0);
        assert_eq!(listing.products[1].display_weight, 0.4);
        assert_eq!(listing.display_weights, vec![1.0, 0.6]);
    }

    #[tokio::test]
    async fn should_browse_requested_shop() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .withf(|code| code == "kobe-lettuce")
            .returning(|_| Ok(vec![]));

        let use_case = BrowseShopUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[])),
            settings: settings(),
            logger: mock_logger(),
        };

        let listing = use_case
            .execute(BrowseShopParams {
                shop_code: Some("kobe-lettuce".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(listing.shop_code, "kobe-lettuce");
        assert!(listing.products.is_empty());
        assert!(listing.display_weights.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .returning(|_| Err(CatalogError::InvalidResponse));

        let use_case = BrowseShopUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[])),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case.execute(BrowseShopParams { shop_code: None }).await;

        assert!(matches!(
            result.unwrap_err(),
            ShopError::Catalog(CatalogError::InvalidResponse)
        ));
    }
}
