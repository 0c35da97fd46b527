//! Project resource and its approval actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
