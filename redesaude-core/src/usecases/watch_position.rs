use super::prelude::*;
use crate::gateways::location::{LocationGateway, PositionCallback, Subscription};
use std::sync::Arc;

/// Ask for location access once and, if granted, keep
/// dispatching every new position until the returned
/// subscription is dropped.
pub fn watch_device_position<G, D>(
    gateway: &G,
    accuracy: Accuracy,
    dispatch: D,
) -> Option<Subscription>
where
    G: LocationGateway + ?Sized,
    D: Fn(Action) + Send + Sync + 'static,
{
    let dispatch = Arc::new(dispatch);
    let status = gateway.request_foreground_permission();
    dispatch(Action::LocationPermission(status));
    if !status.is_granted() {
        log::warn!("Location permission was not granted ({status:?})");
        return None;
    }
    let on_update: PositionCallback = {
        let dispatch = Arc::clone(&dispatch);
        Box::new(move |pos: DevicePosition| dispatch(Action::PositionUpdated(pos)))
    };
    match gateway.watch_position(accuracy, on_update) {
        Ok(subscription) => {
            log::info!("Watching the device position ({accuracy:?} accuracy)");
            Some(subscription)
        }
        Err(err) => {
            log::error!("Unable to watch the device position: {err}");
            dispatch(Action::LocationFailed(err.to_string()));
            None
        }
    }
}
