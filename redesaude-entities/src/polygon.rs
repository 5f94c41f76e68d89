use crate::geo::MapPoint;

pub type Ring = Vec<MapPoint>;

/// Outline of a facility: an exterior ring optionally followed by holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub const fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn point(pos: MapPoint) -> Self {
        Self::new(vec![vec![pos]])
    }

    pub fn is_empty(&self) -> bool {
        self.representative_point().is_none()
    }

    /// The first vertex of the first ring.
    ///
    /// Not the centroid: markers are placed at the
    /// first surveyed corner of the facility.
    pub fn representative_point(&self) -> Option<MapPoint> {
        self.rings.first().and_then(|ring| ring.first()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_point_is_first_vertex_of_first_ring() {
        let a = MapPoint::from_lat_lng_deg(-8.05, -34.88);
        let b = MapPoint::from_lat_lng_deg(-8.06, -34.89);
        let c = MapPoint::from_lat_lng_deg(-8.07, -34.87);
        let polygon = Polygon::new(vec![vec![a, b, c, a], vec![b]]);
        assert_eq!(Some(a), polygon.representative_point());
        assert!(!polygon.is_empty());
    }

    #[test]
    fn empty_geometries() {
        assert!(Polygon::default().is_empty());
        assert!(Polygon::new(vec![vec![]]).is_empty());
        assert_eq!(None, Polygon::new(vec![vec![]]).representative_point());
    }
}
