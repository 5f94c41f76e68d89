use redesaude_core::{
    entities::{Accuracy, DevicePosition, MapPoint, PermissionStatus},
    gateways::location::{Error, LocationGateway, PositionCallback, Subscription},
};

/// A stationary device, e.g. a kiosk at a known address.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    pos: MapPoint,
}

impl FixedPosition {
    pub const fn new(pos: MapPoint) -> Self {
        Self { pos }
    }
}

impl LocationGateway for FixedPosition {
    fn request_foreground_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn watch_position(
        &self,
        _: Accuracy,
        on_update: PositionCallback,
    ) -> Result<Subscription, Error> {
        on_update(DevicePosition::now(self.pos));
        Ok(Subscription::finished())
    }
}
