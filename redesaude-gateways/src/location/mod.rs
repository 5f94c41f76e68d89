mod disabled;
mod fixed;
mod gpsd;

pub use self::{disabled::Disabled, fixed::FixedPosition, gpsd::Gpsd};
