//! Application state container.
//!
//! The whole screen is described by one immutable [`AppState`] snapshot.
//! Background tasks and user input only produce [`Action`]s; [`reduce`]
//! is the single place where a new snapshot is derived from the previous
//! one.

use crate::{
    entities::*,
    gateways::alert::Alert,
    map::{MapDeltas, MapRegion},
    usecases,
};
use std::sync::Arc;

/// Availability of the facility dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Pending,
    Loaded(Arc<Catalog>),
    Failed(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            Self::Pending | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocationStatus {
    #[default]
    Undetermined,
    Denied,
    Tracking,
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub enum Action {
    CatalogLoaded(Catalog),
    CatalogFailed(String),
    SearchTermChanged(String),
    SearchSubmitted,
    LocationPermission(PermissionStatus),
    LocationFailed(String),
    PositionUpdated(DevicePosition),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub catalog: CatalogState,
    pub search_term: String,
    pub search_results: Vec<Facility>,
    pub markers: Vec<Marker>,
    pub search_error: Option<usecases::Error>,
    pub location: LocationStatus,
    pub position: Option<DevicePosition>,
    pub region: Option<MapRegion>,
    pub map_deltas: MapDeltas,
}

impl AppState {
    pub fn new(map_deltas: MapDeltas) -> Self {
        Self {
            map_deltas,
            ..Default::default()
        }
    }

    /// Distance between the device and the given facility.
    pub fn distance_to(&self, facility: &Facility) -> Option<Distance> {
        let device = self.position?.pos;
        MapPoint::distance(device, facility.pos()?)
    }
}

/// Derive the next state and the alerts the user has to see.
pub fn reduce(state: AppState, action: Action) -> (AppState, Vec<Alert>) {
    let mut alerts = vec![];
    let next = match action {
        Action::CatalogLoaded(catalog) => AppState {
            catalog: CatalogState::Loaded(Arc::new(catalog)),
            ..state
        },
        Action::CatalogFailed(reason) => {
            alerts.push(Alert::catalog_unavailable());
            AppState {
                catalog: CatalogState::Failed(reason),
                ..state
            }
        }
        Action::SearchTermChanged(search_term) => AppState {
            search_term,
            ..state
        },
        Action::SearchSubmitted => {
            match usecases::search_facilities(&state.catalog, &state.search_term) {
                Ok(search_results) => {
                    let markers = usecases::project_markers(&search_results);
                    AppState {
                        search_results,
                        markers,
                        search_error: None,
                        ..state
                    }
                }
                Err(err) => {
                    log::warn!("Search for '{}' failed: {err}", state.search_term);
                    AppState {
                        search_results: vec![],
                        markers: vec![],
                        search_error: Some(err),
                        ..state
                    }
                }
            }
        }
        Action::LocationPermission(status) => match status {
            PermissionStatus::Granted => AppState {
                location: LocationStatus::Tracking,
                ..state
            },
            PermissionStatus::Denied => {
                alerts.push(Alert::location_permission_denied());
                AppState {
                    location: LocationStatus::Denied,
                    ..state
                }
            }
            PermissionStatus::Undetermined => AppState {
                location: LocationStatus::Undetermined,
                ..state
            },
        },
        Action::LocationFailed(reason) => AppState {
            location: LocationStatus::Unavailable(reason),
            ..state
        },
        Action::PositionUpdated(position) => {
            if !position.pos.is_valid() {
                log::debug!("Ignoring invalid position {}", position.pos);
                state
            } else {
                let region = MapRegion::around(position.pos, state.map_deltas);
                AppState {
                    position: Some(position),
                    region: Some(region),
                    ..state
                }
            }
        }
    };
    (next, alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;

    fn apply(state: AppState, actions: Vec<Action>) -> (AppState, Vec<Alert>) {
        actions
            .into_iter()
            .fold((state, vec![]), |(state, mut alerts), action| {
                let (next, new_alerts) = reduce(state, action);
                alerts.extend(new_alerts);
                (next, alerts)
            })
    }

    #[test]
    fn search_after_catalog_was_loaded() {
        let (state, alerts) = apply(
            AppState::default(),
            vec![
                Action::CatalogLoaded(recife_catalog()),
                Action::SearchTermChanged("Boa Vista".into()),
                Action::SearchSubmitted,
            ],
        );
        assert!(alerts.is_empty());
        assert_eq!(1, state.search_results.len());
        assert_eq!("UPA Centro", state.search_results[0].name);
        assert_eq!(1, state.markers.len());
        assert_eq!("UPA Centro", state.markers[0].title);
        assert_eq!(None, state.search_error);
    }

    #[test]
    fn changing_the_term_does_not_search() {
        let (state, _) = apply(
            AppState::default(),
            vec![
                Action::CatalogLoaded(recife_catalog()),
                Action::SearchTermChanged("boa".into()),
                Action::SearchSubmitted,
                Action::SearchTermChanged("casa amarela".into()),
            ],
        );
        assert_eq!("casa amarela", state.search_term);
        assert_eq!("UPA Centro", state.search_results[0].name);
    }

    #[test]
    fn search_before_catalog_is_ready() {
        let (state, alerts) = apply(
            AppState::default(),
            vec![
                Action::SearchTermChanged("centro".into()),
                Action::SearchSubmitted,
            ],
        );
        assert!(alerts.is_empty());
        assert!(state.search_results.is_empty());
        assert!(state.markers.is_empty());
        assert_eq!(Some(usecases::Error::CatalogNotLoaded), state.search_error);
    }

    #[test]
    fn failed_catalog_alerts_once() {
        let (state, alerts) = apply(
            AppState::default(),
            vec![
                Action::CatalogFailed("connection refused".into()),
                Action::SearchSubmitted,
                Action::SearchSubmitted,
            ],
        );
        assert_eq!(vec![Alert::catalog_unavailable()], alerts);
        assert_eq!(
            CatalogState::Failed("connection refused".into()),
            state.catalog
        );
        assert_eq!(Some(usecases::Error::CatalogUnavailable), state.search_error);
    }

    #[test]
    fn stale_results_are_cleared_on_error() {
        let state = AppState {
            search_results: recife_catalog().facilities().to_vec(),
            ..Default::default()
        };
        let (state, _) = reduce(state, Action::SearchSubmitted);
        assert!(state.search_results.is_empty());
    }

    #[test]
    fn denied_permission_alerts() {
        let (state, alerts) = reduce(
            AppState::default(),
            Action::LocationPermission(PermissionStatus::Denied),
        );
        assert_eq!(vec![Alert::location_permission_denied()], alerts);
        assert_eq!(LocationStatus::Denied, state.location);
        assert_eq!(None, state.position);
    }

    #[test]
    fn follow_the_device() {
        let deltas = MapDeltas { lat: 0.1, lng: 0.1 };
        let first = DevicePosition::now(MapPoint::from_lat_lng_deg(-8.05, -34.9));
        let second = DevicePosition::now(MapPoint::from_lat_lng_deg(-8.06, -34.91));
        let (state, alerts) = apply(
            AppState::new(deltas),
            vec![
                Action::LocationPermission(PermissionStatus::Granted),
                Action::PositionUpdated(first),
                Action::PositionUpdated(second),
            ],
        );
        assert!(alerts.is_empty());
        assert_eq!(LocationStatus::Tracking, state.location);
        assert_eq!(Some(second), state.position);
        assert_eq!(Some(MapRegion::around(second.pos, deltas)), state.region);
    }

    #[test]
    fn ignore_invalid_positions() {
        let (state, _) = reduce(
            AppState::default(),
            Action::PositionUpdated(DevicePosition::now(MapPoint::default())),
        );
        assert_eq!(None, state.position);
        assert_eq!(None, state.region);
    }

    #[test]
    fn distance_from_device_to_facility() {
        let facility = recife_catalog().facilities()[0].clone();
        assert_eq!(None, AppState::default().distance_to(&facility));
        let (state, _) = reduce(
            AppState::default(),
            Action::PositionUpdated(DevicePosition::now(MapPoint::from_lat_lng_deg(-8.05, -34.88))),
        );
        assert_eq!(Some(Distance::from_meters(0.0)), state.distance_to(&facility));
    }
}
