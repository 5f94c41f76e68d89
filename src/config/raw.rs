use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("redesaude.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalog: Option<Catalog>,
    pub location: Option<Location>,
    pub map: Option<Map>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Catalog {
    fn default() -> Self {
        Config::default().catalog.expect("Catalog configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub service: LocationService,
    pub accuracy: Option<Accuracy>,
    pub gpsd: Option<Gpsd>,
    pub fixed: Option<Fixed>,
}

impl Default for Location {
    fn default() -> Self {
        Config::default().location.expect("Location configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationService {
    Gpsd,
    Fixed,
    Disabled,
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accuracy {
    High,
    Balanced,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gpsd {
    pub address: String,
}

impl Default for Gpsd {
    fn default() -> Self {
        Location::default().gpsd.expect("gpsd configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fixed {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub lat_delta: f64,
    pub lng_delta: f64,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}
