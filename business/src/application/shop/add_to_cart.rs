use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartEntry;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;
use crate::domain::shop::decoration::ShopListing;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::shop::weights::WeightSource;
use crate::domain::storefront::settings::StorefrontSettings;

use super::browse::load_listing;

pub struct AddToCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn CatalogService>,
    pub weights: Arc<dyn WeightSource>,
    pub settings: Arc<StorefrontSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<ShopListing, ShopError> {
        self.logger
            .info(&format!("Adding product to cart: {}", params.product_id));

        let entry =
            CartEntry::new(params.product_id).map_err(|_| ShopError::ProductIdEmpty)?;

        // Listing first: a catalog failure must leave the cart unchanged.
        let listing = load_listing(
            self.catalog.as_ref(),
            self.weights.as_ref(),
            &self.settings,
            params.shop_code.as_deref(),
        )
        .await?;

        self.cart_repository.save(&entry).await?;
        self.logger.info(&format!("Cart entry created: {}", entry.id));

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
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::shop::decoration::test_support::ScriptedWeights;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self) -> Result<Vec<CartEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CartEntry, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn save(&self, entry: &CartEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
        }
    }

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
    async fn should_save_entry_and_return_same_listing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .withf(|entry| entry.product_id.as_str() == "B")
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .withf(|code| code == "kobe-lettuce")
            .returning(|_| Ok(vec![product("A", 1000), product("B", 2000)]));

        let use_case = AddToCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[0.5, 0.5])),
            settings: settings(),
            logger: mock_logger(),
        };

        let listing = use_case
            .execute(AddToCartParams {
                product_id: ProductId::new("B"),
                shop_code: Some("kobe-lettuce".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(listing.shop_code, "kobe-lettuce");
        assert_eq!(listing.products.len(), 2);
    }

    #[tokio::test]
    async fn should_reject_empty_product_id_without_saving() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().never();

        let use_case = AddToCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            catalog: Arc::new(MockCatalog::new()),
            weights: Arc::new(ScriptedWeights::new(&[])),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                product_id: ProductId::new(""),
                shop_code: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::ProductIdEmpty));
    }

    #[tokio::test]
    async fn should_fail_when_entry_cannot_be_saved() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .returning(|_| Ok(vec![product("A", 1000)]));

        let use_case = AddToCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[])),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                product_id: ProductId::new("A"),
                shop_code: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShopError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_not_save_entry_when_catalog_unavailable() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().never();

        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_shop_code()
            .times(1)
            .returning(|_| Err(CatalogError::Network));

        let use_case = AddToCartUseCaseImpl {
            cart_repository: Arc::new(mock_repo),
            catalog: Arc::new(mock_catalog),
            weights: Arc::new(ScriptedWeights::new(&[])),
            settings: settings(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                product_id: ProductId::new("A"),
                shop_code: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShopError::Catalog(CatalogError::Network)
        ));
    }
}
