use redesaude_boundary::FeatureCollection;
use redesaude_core::{entities::Catalog, gateways::catalog::Error};

mod file;
mod http;

pub use self::{file::FileCatalog, http::HttpCatalog};

fn parse_catalog(bytes: &[u8]) -> Result<Catalog, Error> {
    let collection =
        FeatureCollection::from_slice(bytes).map_err(|err| Error::Parse(err.to_string()))?;
    Ok(collection.into())
}

#[cfg(test)]
const SAMPLE_DATASET: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "NMUNIDAD": "UPA Centro", "NMENDUNID": "Rua A, Boa Vista", "NMPATRIM": "Municipal", "CDTIPO": 3 },
      "geometry": { "type": "Polygon", "coordinates": [[[-34.88, -8.05], [-34.87, -8.05]]] }
    },
    {
      "type": "Feature",
      "properties": { "NMUNIDAD": "Posto Norte", "NMENDUNID": "Av B, Casa Amarela", "NMPATRIM": "Estadual", "CDTIPO": "1" },
      "geometry": { "type": "Polygon", "coordinates": [[[-34.90, -8.02]]] }
    }
  ]
}"#;
