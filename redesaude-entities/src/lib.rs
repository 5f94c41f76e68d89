#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # redesaude-entities
//!
//! Reusable, agnostic domain entities for the municipal health facility map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod catalog;
pub mod facility;
pub mod geo;
pub mod marker;
pub mod polygon;
pub mod position;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
