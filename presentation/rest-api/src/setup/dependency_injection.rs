use std::sync::Arc;

use catalog::client::CatalogClient;
use catalog::product_api::ProductApiCatalog;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::promotional_video::repository::PromotionalVideoRepositoryPostgres;

use business::application::cart::delete::DeleteCartEntryUseCaseImpl;
use business::application::cart::get_all::GetCartUseCaseImpl;
use business::application::cart::get_detail::GetCartEntryDetailUseCaseImpl;
use business::application::checkout::confirm::ConfirmCheckoutUseCaseImpl;
use business::application::checkout::confirm_one_click::ConfirmOneClickCheckoutUseCaseImpl;
use business::application::checkout::view::ViewCheckoutUseCaseImpl;
use business::application::checkout::view_one_click::ViewOneClickCheckoutUseCaseImpl;
use business::application::promotional_video::get_by_id::GetPromotionalVideoByIdUseCaseImpl;
use business::application::promotional_video::get_showcase::GetShowcaseUseCaseImpl;
use business::application::shop::add_to_cart::AddToCartUseCaseImpl;
use business::application::shop::browse::BrowseShopUseCaseImpl;
use business::domain::shop::weights::{SeededWeightSource, ThreadWeightSource, WeightSource};

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::promotional_video::routes::PromotionalVideoApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub product_api: ProductApi,
    pub promotional_video_api: PromotionalVideoApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let promotional_video_repository = Arc::new(PromotionalVideoRepositoryPostgres::new(pool));
        let catalog = Arc::new(ProductApiCatalog::new(CatalogClient::new(
            config.catalog.base_url.clone(),
            config.catalog.api_key.clone(),
        )));

        let settings = Arc::new(config.storefront.settings.clone());
        let weights: Arc<dyn WeightSource> = match config.storefront.weight_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded display weights");
                Arc::new(SeededWeightSource::new(seed))
            }
            None => Arc::new(ThreadWeightSource),
        };

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_cart_entry_detail_use_case = Arc::new(GetCartEntryDetailUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let delete_cart_entry_use_case = Arc::new(DeleteCartEntryUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Checkout use cases
        let view_checkout_use_case = Arc::new(ViewCheckoutUseCaseImpl {
            cart_repository: cart_repository.clone(),
            catalog: catalog.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let confirm_checkout_use_case = Arc::new(ConfirmCheckoutUseCaseImpl {
            cart_repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let view_one_click_use_case = Arc::new(ViewOneClickCheckoutUseCaseImpl {
            catalog: catalog.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let confirm_one_click_use_case = Arc::new(ConfirmOneClickCheckoutUseCaseImpl {
            catalog: catalog.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });

        // Shop use cases
        let browse_use_case = Arc::new(BrowseShopUseCaseImpl {
            catalog: catalog.clone(),
            weights: weights.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            catalog,
            weights,
            settings: settings.clone(),
            logger: logger.clone(),
        });

        // Promotional video use cases
        let get_showcase_use_case = Arc::new(GetShowcaseUseCaseImpl {
            repository: promotional_video_repository.clone(),
            cart_repository,
            settings,
            logger: logger.clone(),
        });
        let get_promotional_video_use_case = Arc::new(GetPromotionalVideoByIdUseCaseImpl {
            repository: promotional_video_repository,
            logger,
        });

        let cart_api = CartApi::new(
            get_cart_use_case,
            get_cart_entry_detail_use_case,
            delete_cart_entry_use_case,
        );

        let checkout_api = CheckoutApi::new(
            view_checkout_use_case,
            confirm_checkout_use_case,
            view_one_click_use_case,
            confirm_one_click_use_case,
        );

        let product_api = ProductApi::new(browse_use_case, add_to_cart_use_case);

        let promotional_video_api =
            PromotionalVideoApi::new(get_showcase_use_case, get_promotional_video_use_case);

        Ok(Self {
            health_api,
            cart_api,
            checkout_api,
            product_api,
            promotional_video_api,
        })
    }
}
