use crate::{geo::MapPoint, polygon::Polygon};

/// A health-service location of the municipal network.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Facility {
    pub name      : String,
    pub address   : Option<String>,
    pub patrimony : Option<String>,
    pub type_code : Option<String>,
    pub geometry  : Polygon,
}

impl Facility {
    pub fn pos(&self) -> Option<MapPoint> {
        self.geometry.representative_point()
    }
}
