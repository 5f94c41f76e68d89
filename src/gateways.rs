use crate::config::{self, CatalogSource, LocationService};
use redesaude_core::{
    entities::{Accuracy, Catalog, PermissionStatus},
    gateways::{
        catalog::{self as catalog_gw, CatalogGateway},
        location::{self as location_gw, LocationGateway, PositionCallback, Subscription},
    },
};
use redesaude_gateways::{
    catalog::{FileCatalog, HttpCatalog},
    location::{Disabled, FixedPosition, Gpsd},
};

pub fn catalog_gateway(cfg: &config::Catalog) -> CatalogGw {
    match &cfg.source {
        CatalogSource::Url(url) => match url.strip_prefix("file://") {
            Some(path) => CatalogGw::new(FileCatalog::new(path)),
            None => CatalogGw::new(HttpCatalog::new(url.clone(), cfg.timeout)),
        },
        CatalogSource::File(path) => CatalogGw::new(FileCatalog::new(path.clone())),
    }
}

pub fn location_gateway(cfg: &config::Location) -> LocationGw {
    match &cfg.service {
        LocationService::Gpsd { address } => LocationGw::new(Gpsd::new(address.clone())),
        LocationService::Fixed { pos } => LocationGw::new(FixedPosition::new(*pos)),
        LocationService::Disabled => {
            log::warn!("No location service available");
            LocationGw::new(Disabled)
        }
    }
}

pub struct CatalogGw(Box<dyn CatalogGateway + Send + Sync + 'static>);

impl CatalogGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: CatalogGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl CatalogGateway for CatalogGw {
    fn fetch_catalog(&self) -> Result<Catalog, catalog_gw::Error> {
        self.0.fetch_catalog()
    }
}

pub struct LocationGw(Box<dyn LocationGateway + Send + Sync + 'static>);

impl LocationGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: LocationGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl LocationGateway for LocationGw {
    fn request_foreground_permission(&self) -> PermissionStatus {
        self.0.request_foreground_permission()
    }

    fn watch_position(
        &self,
        accuracy: Accuracy,
        on_update: PositionCallback,
    ) -> Result<Subscription, location_gw::Error> {
        self.0.watch_position(accuracy, on_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, process};

    const DATASET: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "properties": { "NMUNIDAD": "UPA Centro", "NMENDUNID": "Rua A, Boa Vista" },
          "geometry": { "type": "Point", "coordinates": [-34.88, -8.05] }
        }
      ]
    }"#;

    #[test]
    fn read_file_urls_from_disk() {
        let path = env::temp_dir().join(format!("redesaude-{}-gateways.geojson", process::id()));
        fs::write(&path, DATASET).unwrap();
        let gw = catalog_gateway(&config::Catalog {
            source: CatalogSource::Url(format!("file://{}", path.display())),
            timeout: None,
        });
        let catalog = gw.fetch_catalog();
        fs::remove_file(&path).unwrap();
        assert_eq!(1, catalog.unwrap().len());
    }

    #[test]
    fn disabled_location_service() {
        let gw = location_gateway(&config::Location {
            service: LocationService::Disabled,
            accuracy: Accuracy::High,
        });
        assert_eq!(PermissionStatus::Denied, gw.request_foreground_permission());
    }
}
