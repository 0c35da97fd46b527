use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{MaterialId, OrderId};
use crate::notice::UserFacing;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order {id} cannot be received while {status}")]
    NotDelivered { id: OrderId, status: String },
    #[error("Unexpected reply from order service")]
    UnexpectedReply,
    #[error(transparent)]
    Service(#[from] FrameworkError),
}

impl UserFacing for OrderError {
    fn user_message(&self) -> Option<String> {
        match self {
            OrderError::Service(e) => e.user_message(),
            OrderError::UnexpectedReply => None,
            local => Some(local.to_string()),
        }
    }
}

/// Errors raised while composing a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),
    #[error("Material {0} is out of stock")]
    OutOfStock(MaterialId),
    #[error("Add items to the cart first.")]
    EmptyCart,
}

impl UserFacing for CartError {
    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
