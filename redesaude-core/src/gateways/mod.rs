pub mod alert;
pub mod catalog;
pub mod location;
