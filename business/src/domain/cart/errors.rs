#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_id_empty")]
    ProductIdEmpty,
    #[error("cart.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
