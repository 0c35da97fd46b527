use serde::{Deserialize, Serialize};

use crate::domain::{MaterialId, ProjectId};

/// Material taken out of the warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expenditure {
    #[serde(rename = "ExpenditureID", default)]
    pub id: Option<u64>,
    #[serde(rename = "WarehouseMaterialID")]
    pub material_id: MaterialId,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "ProjectID", default)]
    pub project_id: Option<ProjectId>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpenditure {
    #[serde(rename = "WarehouseMaterialID")]
    pub material_id: MaterialId,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "ProjectID", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
