use crate::entities::{Accuracy, DevicePosition, PermissionStatus};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PositionCallback = Box<dyn Fn(DevicePosition) + Send + 'static>;

/// Device location service.
pub trait LocationGateway {
    fn request_foreground_permission(&self) -> PermissionStatus;

    /// Start delivering position updates until the returned
    /// subscription is dropped.
    fn watch_position(
        &self,
        accuracy: Accuracy,
        on_update: PositionCallback,
    ) -> Result<Subscription, Error>;
}

/// Handle of a running position watch.
///
/// Dropping the handle stops the watch and releases
/// all resources that belong to it.
#[must_use = "dropping the subscription stops the position updates"]
pub struct Subscription {
    stop: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    pub fn new<F>(stop: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            stop: Some(Box::new(stop)),
        }
    }

    /// A subscription that has nothing to release.
    pub fn finished() -> Self {
        Self { stop: None }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.stop.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn stop_once_on_drop() {
        let stopped = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&stopped);
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(0, stopped.load(Ordering::SeqCst));
        sub.cancel();
        assert_eq!(1, stopped.load(Ordering::SeqCst));
    }

    #[test]
    fn finished_subscription_does_nothing() {
        let sub = Subscription::finished();
        assert_eq!("Subscription { active: false }", format!("{sub:?}"));
    }
}
