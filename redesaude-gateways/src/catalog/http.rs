use super::parse_catalog;
use redesaude_core::{
    entities::Catalog,
    gateways::catalog::{CatalogGateway, Error},
};
use std::time::Duration;

/// Downloads the dataset from the open data portal.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
    timeout: Option<Duration>,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}

impl CatalogGateway for HttpCatalog {
    fn fetch_catalog(&self) -> Result<Catalog, Error> {
        log::info!("Fetching health facilities from {}", self.url);
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(network_error)?;
        let response = client.get(&self.url).send().map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("Dataset server response: {:#?}", response);
            return Err(Error::Status(status.as_u16()));
        }
        let bytes = response.bytes().map_err(network_error)?;
        log::debug!("Received {} bytes", bytes.len());
        parse_catalog(&bytes)
    }
}
