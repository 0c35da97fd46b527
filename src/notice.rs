//! Transient user notifications produced by view actions.

use std::fmt;

use crate::actor_framework::FrameworkError;
use crate::transport::Ack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(message) => write!(f, "✔ {}", message),
            Notice::Error(message) => write!(f, "✖ {}", message),
        }
    }
}

/// Errors that know what, if anything, to tell the user.
pub trait UserFacing {
    /// Message to show instead of the view's generic fallback. Backend
    /// rejections yield the backend's message; local validation yields its
    /// own description; transport failures yield `None`.
    fn user_message(&self) -> Option<String>;
}

impl UserFacing for FrameworkError {
    fn user_message(&self) -> Option<String> {
        self.backend_message().map(str::to_owned)
    }
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn failure<E: UserFacing>(err: &E, fallback: &str) -> Self {
        Notice::Error(err.user_message().unwrap_or_else(|| fallback.to_owned()))
    }

    pub fn success(ack: &Ack, fallback: &str) -> Self {
        Notice::Success(ack.message.clone().unwrap_or_else(|| fallback.to_owned()))
    }

    /// Notice for the outcome of one backend action.
    pub fn outcome<E: UserFacing>(result: &Result<Ack, E>, success: &str, failure: &str) -> Self {
        match result {
            Ok(ack) => Notice::success(ack, success),
            Err(err) => Notice::failure(err, failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_backend_message_over_fallback() {
        let rejected: Result<Ack, FrameworkError> = Err(FrameworkError::Rejected {
            status: 409,
            message: Some("Order already received".into()),
        });
        assert_eq!(
            Notice::outcome(&rejected, "ok", "Failed to receive order."),
            Notice::Error("Order already received".into())
        );

        let offline: Result<Ack, FrameworkError> = Err(FrameworkError::Transport("connection refused".into()));
        assert_eq!(
            Notice::outcome(&offline, "ok", "Failed to receive order."),
            Notice::Error("Failed to receive order.".into())
        );
    }

    #[test]
    fn success_uses_ack_message_when_present() {
        let ack = Ack { message: Some("Order received".into()) };
        assert_eq!(Notice::success(&ack, "Done"), Notice::Success("Order received".into()));
        assert_eq!(Notice::success(&Ack::default(), "Done"), Notice::Success("Done".into()));
    }
}
