#[derive(Debug, thiserror::Error)]
pub enum PromotionalVideoError {
    #[error("promotional_video.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
