pub use redesaude_entities::builders::*;

use super::prelude::*;
use std::sync::Arc;

pub fn loaded(catalog: Catalog) -> CatalogState {
    CatalogState::Loaded(Arc::new(catalog))
}

pub fn recife_catalog() -> Catalog {
    Catalog::build()
        .facility(
            Facility::build()
                .name("UPA Centro")
                .address("Rua A, Boa Vista")
                .pos(-8.05, -34.88)
                .finish(),
        )
        .facility(
            Facility::build()
                .name("Posto Norte")
                .address("Av B, Casa Amarela")
                .pos(-8.02, -34.90)
                .finish(),
        )
        .finish()
}
