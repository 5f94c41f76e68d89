use anyhow::{anyhow, Result};
use redesaude_core::{
    entities::{Accuracy, MapPoint},
    map::MapDeltas,
};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "redesaude.toml";

const ENV_NAME_CATALOG_URL: &str = "REDESAUDE_CATALOG_URL";
const ENV_NAME_GPSD_ADDRESS: &str = "REDESAUDE_GPSD_ADDRESS";

pub struct Config {
    pub catalog: Catalog,
    pub location: Location,
    pub map: MapDeltas,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(url) = env::var(ENV_NAME_CATALOG_URL) {
            cfg.catalog.source = CatalogSource::Url(url);
        }
        if let Ok(address) = env::var(ENV_NAME_GPSD_ADDRESS) {
            if let LocationService::Gpsd { address: configured } = &mut cfg.location.service {
                *configured = address;
            }
        }
        Ok(cfg)
    }
}

pub struct Catalog {
    pub source: CatalogSource,
    /// Request timeout, only used for [`CatalogSource::Url`].
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    /// For offline usage
    File(PathBuf),
}

pub struct Location {
    pub service: LocationService,
    pub accuracy: Accuracy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationService {
    Gpsd { address: String },
    Fixed { pos: MapPoint },
    Disabled,
}

impl From<raw::Accuracy> for Accuracy {
    fn from(from: raw::Accuracy) -> Self {
        match from {
            raw::Accuracy::High => Self::High,
            raw::Accuracy::Balanced => Self::Balanced,
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            catalog,
            location,
            map,
        } = from;

        let raw::Catalog { url, file, timeout } = catalog.unwrap_or_default();
        let source = match (file, url) {
            (Some(file), _) => CatalogSource::File(file),
            (None, Some(url)) => CatalogSource::Url(url),
            (None, None) => return Err(anyhow!("Missing catalog 'url' or 'file'")),
        };
        let catalog = Catalog { source, timeout };

        let raw::Location {
            service,
            accuracy,
            gpsd,
            fixed,
        } = location.unwrap_or_default();
        let service = match service {
            raw::LocationService::Gpsd => {
                let raw::Gpsd { address } = gpsd.unwrap_or_default();
                log::info!("Use gpsd location service ({address})");
                LocationService::Gpsd { address }
            }
            raw::LocationService::Fixed => {
                let raw::Fixed { lat, lng } = fixed.ok_or_else(|| {
                    anyhow!("Missing 'fixed' location service configuration")
                })?;
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid fixed position: {lat},{lng}"))?;
                log::info!("Use fixed position {pos}");
                LocationService::Fixed { pos }
            }
            raw::LocationService::Disabled => {
                log::info!("Location service disabled");
                LocationService::Disabled
            }
        };
        let location = Location {
            service,
            accuracy: accuracy.map(Into::into).unwrap_or_default(),
        };

        let raw::Map {
            lat_delta,
            lng_delta,
        } = map.unwrap_or_default();
        for delta in [lat_delta, lng_delta] {
            if !(delta > 0.0 && delta <= 180.0) {
                return Err(anyhow!("Invalid map delta: {delta}"));
            }
        }
        let map = MapDeltas {
            lat: lat_delta,
            lng: lng_delta,
        };

        Ok(Self {
            catalog,
            location,
            map,
        })
    }
}
