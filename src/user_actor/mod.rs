//! User resource: listing, lookup, deletion and registration.

pub mod entity;
pub mod error;

pub use error::*;
