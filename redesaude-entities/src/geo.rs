use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location on a (flat) map in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl Default for MapPoint {
    fn default() -> Self {
        let res = Self {
            lat: f64::NAN,
            lng: f64::NAN,
        };
        debug_assert!(!res.is_valid());
        res
    }
}

impl MapPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let lat = lat.into();
        let lng = lng.into();
        debug_assert!((LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat));
        debug_assert!((LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng));
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let lat = lat.into();
        let lng = lng.into();
        if (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
        {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let meters = self.to_meters();
        if meters < 1_000.0 {
            write!(f, "{meters:.0} m")
        } else {
            write!(f, "{:.1} km", meters / 1_000.0)
        }
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: <https://en.wikipedia.org/wiki/Great-circle_distance>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if !pt.is_valid() {
            return false;
        }
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // crosses the antimeridian (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}
