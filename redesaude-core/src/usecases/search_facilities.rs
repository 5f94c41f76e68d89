use super::prelude::*;
use crate::text::contains_ignore_case;

/// All facilities of the catalog whose address contains `query`,
/// ignoring case, in catalog order.
///
/// Facilities without an address never match.
pub fn filter_by_address(catalog: &Catalog, query: &str) -> Vec<Facility> {
    catalog
        .iter()
        .filter(|f| {
            f.address
                .as_deref()
                .is_some_and(|addr| contains_ignore_case(addr, query))
        })
        .cloned()
        .collect()
}

pub fn search_facilities(catalog: &CatalogState, query: &str) -> Result<Vec<Facility>> {
    match catalog {
        CatalogState::Loaded(catalog) => {
            let results = filter_by_address(catalog, query);
            log::debug!(
                "Search for '{query}' matched {} of {} facilities",
                results.len(),
                catalog.len()
            );
            Ok(results)
        }
        CatalogState::Pending => Err(Error::CatalogNotLoaded),
        CatalogState::Failed(_) => Err(Error::CatalogUnavailable),
    }
}
