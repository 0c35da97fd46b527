use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::MaterialId;
use crate::notice::UserFacing;

/// Errors from the catalog and the warehouse inventory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Material not found: {0}")]
    NotFound(MaterialId),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
    #[error("Material name is required")]
    MissingName,
    #[error(transparent)]
    Service(#[from] FrameworkError),
}

impl UserFacing for InventoryError {
    fn user_message(&self) -> Option<String> {
        match self {
            InventoryError::Service(e) => e.user_message(),
            local => Some(local.to_string()),
        }
    }
}
