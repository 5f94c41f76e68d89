pub mod gateways;
pub mod map;
pub mod state;
pub mod text;
pub mod usecases;

pub mod entities {
    pub use redesaude_entities::{
        catalog::*, facility::*, geo::*, marker::*, polygon::*, position::*, time::*,
    };
}
