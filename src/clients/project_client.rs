use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Project, ProjectId};
use crate::project_actor::{ProjectAction, ProjectError};
use crate::transport::Ack;

/// Client for interacting with the Project resource service.
#[derive(Clone)]
pub struct ProjectClient {
    inner: ResourceClient<Project>,
}

impl_client_new!(ProjectClient, Project);
impl_list_method!(ProjectClient, Project, ProjectError, project);

impl ProjectClient {
    #[instrument(skip(self))]
    pub async fn approve_project(&self, id: ProjectId) -> Result<Ack, ProjectError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, ProjectAction::Approve).await?)
    }

    #[instrument(skip(self))]
    pub async fn approve_additional_materials(&self, id: ProjectId) -> Result<Ack, ProjectError> {
        debug!("Sending request");
        Ok(self
            .inner
            .perform_action(id, ProjectAction::ApproveAdditionalMaterials)
            .await?)
    }
}
