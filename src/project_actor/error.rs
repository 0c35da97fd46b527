use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProjectId;
use crate::notice::UserFacing;

/// Errors that can occur during project operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),
    #[error("Project {id} is {status}; only pending projects can be approved")]
    NotPending { id: ProjectId, status: String },
    #[error("Project {0} has no materials awaiting approval")]
    NoPendingMaterials(ProjectId),
    #[error(transparent)]
    Service(#[from] FrameworkError),
}

impl UserFacing for ProjectError {
    fn user_message(&self) -> Option<String> {
        match self {
            ProjectError::Service(e) => e.user_message(),
            local => Some(local.to_string()),
        }
    }
}
