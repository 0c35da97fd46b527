use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::lenient_number;
use crate::search::{contains_ignore_case, Searchable};

pub type ProjectId = u64;

/// A construction project and the materials attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "projectID")]
    pub id: ProjectId,
    #[serde(rename = "nama_project")]
    pub name: String,
    #[serde(rename = "projectManager", default)]
    pub manager: String,
    /// Raw status string as sent by the backend.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "MaterialProyeks", default)]
    pub materials: Vec<ProjectMaterial>,
}

/// A material request attached to a project, pending manager sign-off until
/// `approved` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMaterial {
    #[serde(rename = "materialProyekID")]
    pub id: u64,
    #[serde(rename = "materialName")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum ProjectStatus {
    Pending,
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown project status: {0:?}")]
pub struct UnknownProjectStatus(pub String);

/// Presentational progress per status: (status, percent, colour).
const PROGRESS_TABLE: [(ProjectStatus, u8, &str); 3] = [
    (ProjectStatus::Pending, 10, "orange"),
    (ProjectStatus::InProgress, 50, "darkblue"),
    (ProjectStatus::Completed, 100, "green"),
];

const UNKNOWN_PROGRESS: (u8, &str) = (0, "gray");

impl ProjectStatus {
    pub fn parse(raw: &str) -> Result<Self, UnknownProjectStatus> {
        Self::from_str(raw).map_err(|_| UnknownProjectStatus(raw.to_owned()))
    }

    fn entry(&self) -> (u8, &'static str) {
        PROGRESS_TABLE
            .iter()
            .find(|(status, _, _)| status == self)
            .map(|(_, percent, colour)| (*percent, *colour))
            .unwrap_or(UNKNOWN_PROGRESS)
    }

    pub fn progress_percent(&self) -> u8 {
        self.entry().0
    }

    pub fn colour(&self) -> &'static str {
        self.entry().1
    }
}

impl Project {
    pub fn status(&self) -> Result<ProjectStatus, UnknownProjectStatus> {
        ProjectStatus::parse(&self.status)
    }

    /// Progress-bar percentage; unrecognised statuses show 0.
    pub fn progress_percent(&self) -> u8 {
        self.status()
            .map(|status| status.progress_percent())
            .unwrap_or(UNKNOWN_PROGRESS.0)
    }

    pub fn progress_colour(&self) -> &'static str {
        self.status().map(|status| status.colour()).unwrap_or(UNKNOWN_PROGRESS.1)
    }

    pub fn approved_materials(&self) -> impl Iterator<Item = &ProjectMaterial> {
        self.materials.iter().filter(|material| material.approved)
    }

    /// Materials added since the last approval ("new update").
    pub fn pending_materials(&self) -> impl Iterator<Item = &ProjectMaterial> {
        self.materials.iter().filter(|material| !material.approved)
    }

    pub fn has_pending_materials(&self) -> bool {
        self.pending_materials().next().is_some()
    }
}

impl Searchable for Project {
    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(status: &str) -> Project {
        serde_json::from_value(json!({
            "projectID": 1,
            "nama_project": "Gedung A",
            "projectManager": "Budi",
            "status": status,
            "MaterialProyeks": [
                { "materialProyekID": 1, "materialName": "Semen", "quantity": 20, "approved": true },
                { "materialProyekID": 2, "materialName": "Pasir", "quantity": 3, "approved": false }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn progress_follows_status_table() {
        assert_eq!(project("Pending").progress_percent(), 10);
        assert_eq!(project("In Progress").progress_percent(), 50);
        assert_eq!(project("Completed").progress_percent(), 100);
        assert_eq!(project("Completed").progress_colour(), "green");
    }

    #[test]
    fn unknown_status_is_an_error_with_zero_progress() {
        let p = project("On Hold");
        assert_eq!(p.status(), Err(UnknownProjectStatus("On Hold".to_string())));
        assert_eq!(p.progress_percent(), 0);
        assert_eq!(p.progress_colour(), "gray");
    }

    #[test]
    fn splits_approved_and_pending_materials() {
        let p = project("In Progress");
        let approved: Vec<_> = p.approved_materials().map(|m| m.name.as_str()).collect();
        let pending: Vec<_> = p.pending_materials().map(|m| m.name.as_str()).collect();
        assert_eq!(approved, vec!["Semen"]);
        assert_eq!(pending, vec!["Pasir"]);
        assert!(p.has_pending_materials());
    }

    #[test]
    fn material_quantity_accepts_numeric_string() {
        let material: ProjectMaterial = serde_json::from_value(json!({
            "materialProyekID": 3, "materialName": "Besi", "quantity": "12.5", "approved": false
        }))
        .unwrap();
        assert_eq!(material.quantity, 12.5);
    }
}
