use crate::geo::MapPoint;

/// A facility as it is shown on the map.
///
/// The `id` is the index of the facility in the search result
/// it was projected from and is not stable across searches.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: usize,
    pub title: String,
    pub pos: MapPoint,
}
