//! Wire formats: the GeoJSON dataset published by the municipality
//! and the JSON documents written by the `search` command.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Expected a GeoJSON FeatureCollection but got '{0}'")]
    NotAFeatureCollection(String),
    #[error("Unsupported geometry type '{0}'")]
    UnsupportedGeometry(String),
}

/// `[longitude, latitude]` optionally followed by an altitude.
pub type Position = Vec<f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let collection: Self = serde_json::from_slice(bytes)?;
        if collection.kind != "FeatureCollection" {
            return Err(Error::NotAFeatureCollection(collection.kind));
        }
        Ok(collection)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<FacilityProperties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityProperties {
    #[serde(rename = "NMUNIDAD", default)]
    pub name      : Option<String>,
    #[serde(rename = "NMENDUNID", default)]
    pub address   : Option<String>,
    #[serde(rename = "NMPATRIM", default)]
    pub patrimony : Option<String>,
    #[serde(rename = "CDTIPO", default)]
    pub type_code : Option<TypeCode>,
}

/// The dataset encodes the facility type either as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// The rings of the (first) polygon described by this geometry.
    ///
    /// A `Point` is treated as a polygon with a single one-vertex ring.
    pub fn polygon_rings(&self) -> Result<Vec<Vec<Position>>, Error> {
        let coordinates = self.coordinates.clone();
        match self.kind.as_str() {
            "Polygon" => Ok(serde_json::from_value(coordinates)?),
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<Position>>> = serde_json::from_value(coordinates)?;
                Ok(polygons.into_iter().next().unwrap_or_default())
            }
            "Point" => {
                let pos: Position = serde_json::from_value(coordinates)?;
                Ok(vec![vec![pos]])
            }
            other => Err(Error::UnsupportedGeometry(other.to_string())),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub name      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patrimony : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_code : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat       : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng       : Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: usize,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<FacilityInfo>,
    pub markers: Vec<Marker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "type": "FeatureCollection",
      "name": "saudemunicipalestadual",
      "features": [
        {
          "type": "Feature",
          "properties": {
            "NMUNIDAD": "USF Coque",
            "NMENDUNID": "Rua Capitão Temudo, 88 - Coque",
            "NMPATRIM": "Municipal",
            "CDTIPO": 2,
            "OBJECTID": 17
          },
          "geometry": {
            "type": "Polygon",
            "coordinates": [[[-34.8966, -8.0729], [-34.8960, -8.0731], [-34.8966, -8.0729]]]
          }
        },
        {
          "type": "Feature",
          "properties": { "NMUNIDAD": "Policlínica Lessa de Andrade", "NMENDUNID": null, "CDTIPO": "PL" },
          "geometry": null
        }
      ]
    }"#;

    #[test]
    fn parse_municipal_dataset() {
        let collection = FeatureCollection::from_slice(SAMPLE.as_bytes()).unwrap();
        assert_eq!(2, collection.features.len());

        let first = &collection.features[0];
        let props = first.properties.as_ref().unwrap();
        assert_eq!(Some("USF Coque"), props.name.as_deref());
        assert_eq!(Some("Municipal"), props.patrimony.as_deref());
        assert_eq!(Some("2".to_string()), props.type_code.as_ref().map(ToString::to_string));
        let rings = first.geometry.as_ref().unwrap().polygon_rings().unwrap();
        assert_eq!(vec![-34.8966, -8.0729], rings[0][0]);

        let second = &collection.features[1];
        let props = second.properties.as_ref().unwrap();
        assert_eq!(None, props.address);
        assert_eq!(Some(TypeCode::Text("PL".into())), props.type_code);
        assert!(second.geometry.is_none());
    }

    #[test]
    fn reject_other_documents() {
        let err =
            FeatureCollection::from_slice(br#"{"type":"Feature","features":[]}"#).unwrap_err();
        assert!(matches!(err, Error::NotAFeatureCollection(kind) if kind == "Feature"));
        let err = FeatureCollection::from_slice(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn multi_polygon_and_point_geometries() {
        let multi: Geometry = serde_json::from_str(
            r#"{"type":"MultiPolygon","coordinates":[[[[-34.9,-8.0],[-34.8,-8.1]]],[[[0.0,0.0]]]]}"#,
        )
        .unwrap();
        assert_eq!(
            vec![vec![vec![-34.9, -8.0], vec![-34.8, -8.1]]],
            multi.polygon_rings().unwrap()
        );

        let point: Geometry =
            serde_json::from_str(r#"{"type":"Point","coordinates":[-34.9,-8.0,4.5]}"#).unwrap();
        assert_eq!(vec![vec![vec![-34.9, -8.0, 4.5]]], point.polygon_rings().unwrap());

        let line: Geometry =
            serde_json::from_str(r#"{"type":"LineString","coordinates":[[0.0,0.0]]}"#).unwrap();
        assert!(matches!(line.polygon_rings(), Err(Error::UnsupportedGeometry(_))));
    }

    #[test]
    fn serialize_search_response_without_empty_fields() {
        let response = SearchResponse {
            query: "boa vista".into(),
            results: vec![FacilityInfo {
                name: "UPA Centro".into(),
                address: Some("Rua A, Boa Vista".into()),
                patrimony: None,
                type_code: None,
                lat: Some(-8.05),
                lng: Some(-34.88),
            }],
            markers: vec![Marker {
                id: 0,
                title: "UPA Centro".into(),
                latitude: -8.05,
                longitude: -34.88,
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serde_json::json!({
                "query": "boa vista",
                "results": [{
                    "name": "UPA Centro",
                    "address": "Rua A, Boa Vista",
                    "lat": -8.05,
                    "lng": -34.88
                }],
                "markers": [{
                    "id": 0,
                    "title": "UPA Centro",
                    "latitude": -8.05,
                    "longitude": -34.88
                }]
            }),
            json
        );
    }
}
