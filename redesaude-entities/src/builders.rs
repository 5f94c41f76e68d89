pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{catalog_builder::*, facility_builder::*};

pub mod facility_builder {

    use super::*;
    use crate::{facility::*, geo::*, polygon::*};

    #[derive(Debug)]
    pub struct FacilityBuild {
        facility: Facility,
    }

    impl FacilityBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.facility.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.facility.address = Some(address.into());
            self
        }
        pub fn no_address(mut self) -> Self {
            self.facility.address = None;
            self
        }
        pub fn patrimony(mut self, patrimony: &str) -> Self {
            self.facility.patrimony = Some(patrimony.into());
            self
        }
        pub fn type_code(mut self, type_code: &str) -> Self {
            self.facility.type_code = Some(type_code.into());
            self
        }
        /// A single-vertex outline at the given position.
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.facility.geometry = Polygon::point(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn geometry(mut self, geometry: Polygon) -> Self {
            self.facility.geometry = geometry;
            self
        }
        pub fn no_geometry(mut self) -> Self {
            self.facility.geometry = Polygon::default();
            self
        }
        pub fn finish(self) -> Facility {
            self.facility
        }
    }

    impl Builder for Facility {
        type Build = FacilityBuild;
        fn build() -> FacilityBuild {
            FacilityBuild {
                facility: Facility {
                    name: "Unidade de Saúde".into(),
                    address: Some("Rua da Aurora, Boa Vista".into()),
                    patrimony: None,
                    type_code: None,
                    geometry: Polygon::point(MapPoint::from_lat_lng_deg(-8.0631, -34.8711)),
                },
            }
        }
    }
}

pub mod catalog_builder {

    use super::*;
    use crate::{catalog::*, facility::*};

    #[derive(Debug, Default)]
    pub struct CatalogBuild {
        facilities: Vec<Facility>,
    }

    impl CatalogBuild {
        pub fn facility(mut self, facility: Facility) -> Self {
            self.facilities.push(facility);
            self
        }
        pub fn finish(self) -> Catalog {
            Catalog::new(self.facilities)
        }
    }

    impl Builder for Catalog {
        type Build = CatalogBuild;
        fn build() -> CatalogBuild {
            CatalogBuild::default()
        }
    }
}
