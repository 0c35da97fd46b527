use serde_json::Value;

use crate::actor_framework::{FrameworkError, Resource};
use crate::domain::{Project, ProjectId};
use crate::transport::{Ack, Route};
use super::actions::ProjectAction;

impl Resource for Project {
    type Id = ProjectId;
    type CreatePayload = ();
    type Patch = ();
    type Action = ProjectAction;
    type ActionResult = Ack;

    const NAME: &'static str = "project";

    /// The project list is sent as a bare array.
    fn list_route() -> Option<Route> {
        Some(Route::get("admin/allProjects"))
    }

    fn action_route(id: &ProjectId, action: &ProjectAction) -> Option<Route> {
        Some(match action {
            ProjectAction::Approve => Route::post(format!("admin/approveProject/{}", id)),
            ProjectAction::ApproveAdditionalMaterials => {
                Route::post(format!("admin/approveAdditionalMaterial/{}", id))
            }
        })
    }

    fn decode_action(_action: &ProjectAction, body: Value) -> Result<Ack, FrameworkError> {
        Ok(Ack::from_body(&body))
    }
}
