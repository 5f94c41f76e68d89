mod error;
mod load_catalog;
mod project_markers;
mod search_facilities;
mod watch_position;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, load_catalog::*, project_markers::*, search_facilities::*, watch_position::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, state::*};
}
