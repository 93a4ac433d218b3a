use async_trait::async_trait;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::CatalogService;
use business::domain::shared::value_objects::ProductId;

use crate::client::CatalogClient;

#[derive(Deserialize)]
struct ProductsResponse {
    products: Vec<ProductPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    product_id: String,
    #[serde(default)]
    item_name: String,
    item_price: i64,
    #[serde(default)]
    review_average: f64,
    #[serde(default)]
    medium_image_urls: Vec<String>,
    item_code: String,
    shop_code: String,
    item_url: Option<String>,
}

impl ProductPayload {
    fn into_domain(self) -> Product {
        Product {
            product_id: ProductId::new(self.product_id),
            item_name: self.item_name,
            item_price: self.item_price,
            review_average: self.review_average,
            medium_image_urls: self.medium_image_urls,
            item_code: self.item_code,
            shop_code: self.shop_code,
            item_url: self.item_url,
        }
    }
}

/// `CatalogService` backed by the HTTP product API.
pub struct ProductApiCatalog {
    client: CatalogClient,
}

impl ProductApiCatalog {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn search(&self, key: &str, value: &str) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(key, value, "querying product catalog");

        let mut request = self
            .client
            .client
            .get(self.client.products_url())
            .query(&[(key, value)]);
        if let Some(auth) = self.client.auth_header() {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "product catalog unreachable");
            CatalogError::Network
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), key, value, "product catalog error");
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
            });
        }

        let data: ProductsResponse = response
            .json()
            .await
            .map_err(|_| CatalogError::InvalidResponse)?;

        Ok(data
            .products
            .into_iter()
            .map(ProductPayload::into_domain)
            .collect())
    }

    /// Keeps only requested products and orders them like `ids`.
    fn align_to_requested(ids: &[ProductId], mut products: Vec<Product>) -> Vec<Product> {
        products.retain(|p| ids.contains(&p.product_id));
        products.sort_by_key(|p| ids.iter().position(|id| *id == p.product_id));
        products
    }
}

#[async_trait]
impl CatalogService for ProductApiCatalog {
    async fn fetch_by_product_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let joined = ids
            .iter()
            .map(ProductId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let products = self.search("productIds", &joined).await?;

        Ok(Self::align_to_requested(ids, products))
    }

    async fn fetch_by_shop_code(&self, shop_code: &str) -> Result<Vec<Product>, CatalogError> {
        self.search("shopCode", shop_code).await
    }

    async fn fetch_by_item_code(&self, item_code: &str) -> Result<Vec<Product>, CatalogError> {
        self.search("itemCode", item_code).await
    }
}
