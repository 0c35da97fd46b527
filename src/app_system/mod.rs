//! System orchestration, startup, session and shutdown logic.

pub mod admin_system;
pub mod session;
pub mod tracing;

pub use self::admin_system::*;
pub use self::session::*;
pub use self::tracing::*;
