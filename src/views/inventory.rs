use tracing::{error, info, instrument};

use crate::clients::{ExpenditureClient, MaterialClient};
use crate::domain::{Expenditure, MaterialId, MaterialInput, NewExpenditure, WarehouseMaterial};
use crate::material_actor::InventoryError;
use crate::notice::Notice;
use crate::search;

/// Warehouse stock and the expenditures drawn from it.
pub struct InventoryViewer {
    materials_client: MaterialClient,
    expenditure_client: ExpenditureClient,
    materials: Vec<WarehouseMaterial>,
    expenditures: Vec<Expenditure>,
    query: String,
}

impl InventoryViewer {
    pub fn new(materials_client: MaterialClient, expenditure_client: ExpenditureClient) -> Self {
        Self {
            materials_client,
            expenditure_client,
            materials: Vec::new(),
            expenditures: Vec::new(),
            query: String::new(),
        }
    }

    pub async fn load(&mut self) {
        match self.materials_client.list_materials().await {
            Ok(materials) => {
                info!(count = materials.len(), "Inventory loaded");
                self.materials = materials;
            }
            Err(e) => {
                error!(error = %e, "Failed to load inventory");
                self.materials.clear();
            }
        }
    }

    pub async fn load_expenditures(&mut self) {
        match self.expenditure_client.list_expenditures().await {
            Ok(expenditures) => self.expenditures = expenditures,
            Err(e) => {
                error!(error = %e, "Failed to load expenditures");
                self.expenditures.clear();
            }
        }
    }

    pub fn materials(&self) -> &[WarehouseMaterial] {
        &self.materials
    }

    pub fn expenditures(&self) -> &[Expenditure] {
        &self.expenditures
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&WarehouseMaterial> {
        search::filter(&self.materials, &self.query)
    }

    pub async fn material(&self, id: MaterialId) -> Result<WarehouseMaterial, InventoryError> {
        self.materials_client
            .get_material(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn add_material(&mut self, input: MaterialInput) -> Notice {
        let result = self.materials_client.create_material(input).await;
        self.reload_after(&result).await;
        Notice::outcome(&result, "Material added.", "Failed to add material.")
    }

    #[instrument(skip(self, input))]
    pub async fn edit_material(&mut self, id: MaterialId, input: MaterialInput) -> Notice {
        let result = self.materials_client.update_material(id, input).await;
        self.reload_after(&result).await;
        Notice::outcome(&result, "Material updated.", "Failed to update material.")
    }

    #[instrument(skip(self))]
    pub async fn delete_material(&mut self, id: MaterialId) -> Notice {
        let result = self.materials_client.delete_material(id).await;
        self.reload_after(&result).await;
        Notice::outcome(&result, "Material deleted.", "Failed to delete material.")
    }

    #[instrument(skip(self, expenditure))]
    pub async fn add_expenditure(&mut self, expenditure: NewExpenditure) -> Notice {
        let result = self.expenditure_client.add_expenditure(expenditure).await;
        if result.is_ok() {
            self.load().await;
            self.load_expenditures().await;
        }
        Notice::outcome(&result, "Expenditure recorded.", "Failed to record expenditure.")
    }

    async fn reload_after<T>(&mut self, result: &Result<T, InventoryError>) {
        if result.is_ok() {
            self.load().await;
        }
    }
}
