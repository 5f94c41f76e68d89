use crate::entities::Catalog;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Invalid dataset: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Source of the facility dataset.
pub trait CatalogGateway {
    fn fetch_catalog(&self) -> Result<Catalog, Error>;
}
