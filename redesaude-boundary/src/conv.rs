use super::*;
use redesaude_entities as e;

fn map_point(pos: &[f64]) -> Option<e::geo::MapPoint> {
    match pos {
        [lng, lat, ..] => e::geo::MapPoint::try_from_lat_lng_deg(*lat, *lng),
        _ => None,
    }
}

fn polygon(name: &str, geometry: Option<Geometry>) -> e::polygon::Polygon {
    let Some(geometry) = geometry else {
        log::debug!("Facility '{name}' has no geometry");
        return Default::default();
    };
    let rings = match geometry.polygon_rings() {
        Ok(rings) => rings,
        Err(err) => {
            log::warn!("Ignoring geometry of facility '{name}': {err}");
            return Default::default();
        }
    };
    let rings: Option<Vec<_>> = rings
        .iter()
        .map(|ring| ring.iter().map(|pos| map_point(pos)).collect::<Option<Vec<_>>>())
        .collect();
    rings.map(e::polygon::Polygon::new).unwrap_or_else(|| {
        log::warn!("Ignoring geometry of facility '{name}': invalid coordinates");
        Default::default()
    })
}

impl From<Feature> for e::facility::Facility {
    fn from(from: Feature) -> Self {
        let Feature {
            properties,
            geometry,
        } = from;
        let FacilityProperties {
            name,
            address,
            patrimony,
            type_code,
        } = properties.unwrap_or_default();
        let name = name.unwrap_or_default();
        let geometry = polygon(&name, geometry);
        Self {
            name,
            address,
            patrimony,
            type_code: type_code.map(|c| c.to_string()),
            geometry,
        }
    }
}

impl From<FeatureCollection> for e::catalog::Catalog {
    fn from(from: FeatureCollection) -> Self {
        from.features
            .into_iter()
            .map(e::facility::Facility::from)
            .collect()
    }
}

impl From<&e::facility::Facility> for FacilityInfo {
    fn from(from: &e::facility::Facility) -> Self {
        let pos = from.pos();
        Self {
            name: from.name.clone(),
            address: from.address.clone(),
            patrimony: from.patrimony.clone(),
            type_code: from.type_code.clone(),
            lat: pos.map(e::geo::MapPoint::lat),
            lng: pos.map(e::geo::MapPoint::lng),
        }
    }
}

impl From<e::marker::Marker> for Marker {
    fn from(from: e::marker::Marker) -> Self {
        let e::marker::Marker { id, title, pos } = from;
        Self {
            id,
            title,
            latitude: pos.lat(),
            longitude: pos.lng(),
        }
    }
}
