//! Order resource: listing, creation, receipt, invoices and stock booking.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
