use tracing::{error, info};

use crate::clients::CatalogClient;
use crate::domain::{MaterialId, VendorMaterial};
use crate::search;

/// Orderable vendor materials with a name search.
pub struct CatalogBrowser {
    client: CatalogClient,
    materials: Vec<VendorMaterial>,
    query: String,
}

impl CatalogBrowser {
    pub fn new(client: CatalogClient) -> Self {
        Self { client, materials: Vec::new(), query: String::new() }
    }

    /// Fetches the catalog. A failed fetch leaves the catalog empty.
    pub async fn load(&mut self) {
        match self.client.list_materials().await {
            Ok(materials) => {
                info!(count = materials.len(), "Catalog loaded");
                self.materials = materials;
            }
            Err(e) => {
                error!(error = %e, "Failed to load catalog");
                self.materials.clear();
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&VendorMaterial> {
        search::filter(&self.materials, &self.query)
    }

    pub fn find(&self, id: MaterialId) -> Option<&VendorMaterial> {
        self.materials.iter().find(|material| material.id == id)
    }
}
