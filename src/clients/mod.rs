#[macro_use]
mod macros;

mod auth_client;
mod catalog_client;
mod dashboard_client;
mod material_client;
mod order_client;
mod project_client;
mod user_client;

pub use auth_client::*;
pub use catalog_client::*;
pub use dashboard_client::*;
pub use material_client::*;
pub use order_client::*;
pub use project_client::*;
pub use user_client::*;
