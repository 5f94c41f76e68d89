use redesaude_core::{
    entities::{Accuracy, PermissionStatus},
    gateways::location::{Error, LocationGateway, PositionCallback, Subscription},
};

/// Location access switched off by the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl LocationGateway for Disabled {
    fn request_foreground_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn watch_position(&self, _: Accuracy, _: PositionCallback) -> Result<Subscription, Error> {
        Err(Error::PermissionDenied)
    }
}
