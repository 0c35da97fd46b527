use tracing::{error, info, instrument};

use crate::clients::ProjectClient;
use crate::domain::{Project, ProjectId, ProjectStatus};
use crate::notice::Notice;
use crate::project_actor::ProjectError;
use crate::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectActionKind {
    Approve,
    ApproveAdditionalMaterials,
}

/// Projects awaiting or under the admin's supervision.
pub struct ProjectTracker {
    client: ProjectClient,
    projects: Vec<Project>,
    query: String,
}

impl ProjectTracker {
    pub fn new(client: ProjectClient) -> Self {
        Self { client, projects: Vec::new(), query: String::new() }
    }

    pub async fn load(&mut self) {
        match self.client.list_projects().await {
            Ok(projects) => {
                info!(count = projects.len(), "Projects loaded");
                self.projects = projects;
            }
            Err(e) => {
                error!(error = %e, "Failed to load projects");
                self.projects.clear();
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Project> {
        search::filter(&self.projects, &self.query)
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Approval is offered for pending projects; material sign-off for
    /// in-progress projects with unapproved materials.
    pub fn available_actions(project: &Project) -> Vec<ProjectActionKind> {
        match project.status() {
            Ok(ProjectStatus::Pending) => vec![ProjectActionKind::Approve],
            Ok(ProjectStatus::InProgress) if project.has_pending_materials() => {
                vec![ProjectActionKind::ApproveAdditionalMaterials]
            }
            _ => Vec::new(),
        }
    }

    fn check(&self, id: ProjectId, wanted: ProjectActionKind) -> Result<(), ProjectError> {
        let project = self.find(id).ok_or(ProjectError::NotFound(id))?;
        if Self::available_actions(project).contains(&wanted) {
            return Ok(());
        }
        Err(match wanted {
            ProjectActionKind::Approve => ProjectError::NotPending { id, status: project.status.clone() },
            ProjectActionKind::ApproveAdditionalMaterials => ProjectError::NoPendingMaterials(id),
        })
    }

    #[instrument(skip(self))]
    pub async fn approve_project(&mut self, id: ProjectId) -> Notice {
        if let Err(e) = self.check(id, ProjectActionKind::Approve) {
            return Notice::failure(&e, "Failed to approve project.");
        }
        let result = self.client.approve_project(id).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(&result, "Project approved.", "Failed to approve project.")
    }

    #[instrument(skip(self))]
    pub async fn approve_additional_materials(&mut self, id: ProjectId) -> Notice {
        if let Err(e) = self.check(id, ProjectActionKind::ApproveAdditionalMaterials) {
            return Notice::failure(&e, "Failed to approve additional materials.");
        }
        let result = self.client.approve_additional_materials(id).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(
            &result,
            "Additional materials approved.",
            "Failed to approve additional materials.",
        )
    }
}
