/// Approval actions on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    /// Pending -> In Progress.
    Approve,
    /// Signs off materials attached to an in-progress project.
    ApproveAdditionalMaterials,
}
