use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The facility catalog has not been loaded yet")]
    CatalogNotLoaded,
    #[error("The facility catalog is unavailable")]
    CatalogUnavailable,
}
