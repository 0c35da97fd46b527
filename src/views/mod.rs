//! Screen-level state holders. Each view loads its list through a client,
//! filters it with a free-text query and runs the admin actions, reporting
//! outcomes as [`Notice`](crate::notice::Notice)s.

mod catalog;
mod composer;
mod dashboard;
mod inventory;
mod order_tracker;
mod project_tracker;
mod user_manager;

pub use catalog::*;
pub use composer::*;
pub use dashboard::*;
pub use inventory::*;
pub use order_tracker::*;
pub use project_tracker::*;
pub use user_manager::*;
