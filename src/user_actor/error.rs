use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UserId;
use crate::notice::UserFacing;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("User {0} has no vendor profile")]
    NotAVendor(UserId),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Service(#[from] FrameworkError),
}

impl UserFacing for UserError {
    fn user_message(&self) -> Option<String> {
        match self {
            UserError::Service(e) => e.user_message(),
            local => Some(local.to_string()),
        }
    }
}
