//! Material resources: the vendor catalog, warehouse stock and expenditures.

pub mod entity;
pub mod error;

pub use error::*;
