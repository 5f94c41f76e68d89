use crate::{geo::MapPoint, time::Timestamp};

/// Latest fix reported by the device location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePosition {
    pub pos: MapPoint,
    /// Horizontal accuracy in meters, if the service reports it.
    pub accuracy: Option<f64>,
    pub received_at: Timestamp,
}

impl DevicePosition {
    pub fn now(pos: MapPoint) -> Self {
        Self {
            pos,
            accuracy: None,
            received_at: Timestamp::now(),
        }
    }
}

/// Requested precision of location updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    Balanced,
    #[default]
    High,
}

/// Outcome of asking the user for foreground location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    #[default]
    Undetermined,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}
