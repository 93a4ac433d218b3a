#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("cart.product_id_empty")]
    ProductIdEmpty,
    #[error("catalog.unavailable")]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
