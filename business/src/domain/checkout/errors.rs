#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.item_code_empty")]
    ItemCodeEmpty,
    #[error("checkout.item_not_found")]
    ItemNotFound,
    #[error("catalog.unavailable")]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
