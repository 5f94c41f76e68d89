use super::prelude::*;
use crate::gateways::catalog::CatalogGateway;

/// Fetch the dataset exactly once and turn the outcome into an [`Action`].
///
/// Failures are logged here; the resulting action makes the
/// reducer inform the user.
pub fn load_catalog<G>(gateway: &G) -> Action
where
    G: CatalogGateway + ?Sized,
{
    match gateway.fetch_catalog() {
        Ok(catalog) => {
            log::info!("Loaded {} health facilities", catalog.len());
            Action::CatalogLoaded(catalog)
        }
        Err(err) => {
            log::error!("Unable to load the health facilities: {err}");
            Action::CatalogFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::gateways::catalog::Error as GatewayError;
    use std::cell::Cell;

    struct Dataset {
        result: fn() -> std::result::Result<Catalog, GatewayError>,
        calls: Cell<usize>,
    }

    impl CatalogGateway for Dataset {
        fn fetch_catalog(&self) -> std::result::Result<Catalog, GatewayError> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    #[test]
    fn loaded_catalog() {
        let gw = Dataset {
            result: || Ok(recife_catalog()),
            calls: Cell::new(0),
        };
        let action = load_catalog(&gw);
        assert!(matches!(action, Action::CatalogLoaded(ref c) if c.len() == 2));
        assert_eq!(1, gw.calls.get());
    }

    #[test]
    fn failed_request() {
        let gw = Dataset {
            result: || Err(GatewayError::Status(503)),
            calls: Cell::new(0),
        };
        let action = load_catalog(&gw);
        assert!(matches!(
            action,
            Action::CatalogFailed(ref reason) if reason == "Unexpected HTTP status 503"
        ));
        assert_eq!(1, gw.calls.get());
    }
}
