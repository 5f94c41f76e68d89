use super::prelude::*;

/// Place one marker per facility at the first vertex of its outline.
///
/// The marker id is the index of the facility in `results`.
/// Facilities without any vertex are skipped.
pub fn project_markers(results: &[Facility]) -> Vec<Marker> {
    results
        .iter()
        .enumerate()
        .filter_map(|(id, facility)| {
            let Some(pos) = facility.pos() else {
                log::warn!(
                    "Facility '{}' has no coordinates and is not shown on the map",
                    facility.name
                );
                return None;
            };
            Some(Marker {
                id,
                title: facility.name.clone(),
                pos,
            })
        })
        .collect()
}
