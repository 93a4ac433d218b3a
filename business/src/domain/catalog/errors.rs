/// Failures of the external product catalog.
///
/// These are always surfaced to the caller: a failed lookup must never be
/// mistaken for an empty catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.network_error")]
    Network,
    #[error("catalog.upstream_error")]
    Upstream { status: u16 },
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
