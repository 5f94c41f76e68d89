use crate::entities::{MapBbox, MapPoint, Marker};

pub const DEFAULT_LAT_DELTA: f64 = 0.0922;
pub const DEFAULT_LNG_DELTA: f64 = 0.0421;

/// Span of the visible map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDeltas {
    pub lat: f64,
    pub lng: f64,
}

impl Default for MapDeltas {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT_DELTA,
            lng: DEFAULT_LNG_DELTA,
        }
    }
}

/// The visible part of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: MapPoint,
    pub deltas: MapDeltas,
}

impl MapRegion {
    pub const fn around(center: MapPoint, deltas: MapDeltas) -> Self {
        Self { center, deltas }
    }

    pub fn bbox(&self) -> MapBbox {
        let half_lat = self.deltas.lat / 2.0;
        let half_lng = self.deltas.lng / 2.0;
        let sw = MapPoint::from_lat_lng_deg(
            (self.center.lat() - half_lat).max(-90.0),
            wrap_lng(self.center.lng() - half_lng),
        );
        let ne = MapPoint::from_lat_lng_deg(
            (self.center.lat() + half_lat).min(90.0),
            wrap_lng(self.center.lng() + half_lng),
        );
        MapBbox::new(sw, ne)
    }

    pub fn contains(&self, pos: MapPoint) -> bool {
        self.bbox().contains_point(pos)
    }

    pub fn count_visible(&self, markers: &[Marker]) -> usize {
        let bbox = self.bbox();
        markers.iter().filter(|m| bbox.contains_point(m.pos)).count()
    }
}

fn wrap_lng(lng: f64) -> f64 {
    if lng > 180.0 {
        lng - 360.0
    } else if lng < -180.0 {
        lng + 360.0
    } else {
        lng
    }
}
