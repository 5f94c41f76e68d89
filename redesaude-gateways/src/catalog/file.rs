use super::parse_catalog;
use redesaude_core::{
    entities::Catalog,
    gateways::catalog::{CatalogGateway, Error},
};
use std::{fs, path::PathBuf};

/// Reads the dataset from a local GeoJSON file,
/// e.g. a copy downloaded from the open data portal.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogGateway for FileCatalog {
    fn fetch_catalog(&self) -> Result<Catalog, Error> {
        log::info!("Reading health facilities from {}", self.path.display());
        let bytes = fs::read(&self.path)?;
        parse_catalog(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::SAMPLE_DATASET, *};
    use std::{env, process};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("redesaude-{}-{name}", process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_dataset_from_file() {
        let path = temp_file("dataset.geojson", SAMPLE_DATASET);
        let catalog = FileCatalog::new(&path).fetch_catalog().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(2, catalog.len());
        assert_eq!("UPA Centro", catalog.facilities()[0].name);
        assert_eq!(Some("1"), catalog.facilities()[1].type_code.as_deref());
    }

    #[test]
    fn missing_file() {
        let err = FileCatalog::new("/nonexistent/redesaude.geojson")
            .fetch_catalog()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_file() {
        let path = temp_file("broken.geojson", "{ \"type\": \"FeatureCollection\", ");
        let err = FileCatalog::new(&path).fetch_catalog().unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::Parse(_)));
    }
}
