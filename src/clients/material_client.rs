use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Expenditure, MaterialId, MaterialInput, NewExpenditure, WarehouseMaterial};
use crate::material_actor::InventoryError;
use crate::transport::Ack;

/// Client for warehouse materials.
#[derive(Clone)]
pub struct MaterialClient {
    inner: ResourceClient<WarehouseMaterial>,
}

impl_basic_client!(MaterialClient, WarehouseMaterial, InventoryError, material);

fn validate_quantity(quantity: Option<i64>) -> Result<(), InventoryError> {
    match quantity {
        Some(q) if q < 0 => Err(InventoryError::InvalidQuantity(q)),
        _ => Ok(()),
    }
}

impl MaterialClient {
    #[instrument(skip(self))]
    pub async fn create_material(&self, input: MaterialInput) -> Result<Ack, InventoryError> {
        debug!("Sending request");
        if input.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            return Err(InventoryError::MissingName);
        }
        validate_quantity(input.quantity)?;
        Ok(self.inner.create(input).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_material(&self, id: MaterialId, input: MaterialInput) -> Result<Ack, InventoryError> {
        debug!("Sending request");
        validate_quantity(input.quantity)?;
        Ok(self.inner.update(id, input).await?)
    }
}

/// Client for warehouse expenditures.
#[derive(Clone)]
pub struct ExpenditureClient {
    inner: ResourceClient<Expenditure>,
}

impl_client_new!(ExpenditureClient, Expenditure);
impl_list_method!(ExpenditureClient, Expenditure, InventoryError, expenditure);

impl ExpenditureClient {
    #[instrument(skip(self))]
    pub async fn add_expenditure(&self, expenditure: NewExpenditure) -> Result<Ack, InventoryError> {
        debug!("Sending request");
        if expenditure.quantity < 1 {
            return Err(InventoryError::InvalidQuantity(expenditure.quantity));
        }
        Ok(self.inner.create(expenditure).await?)
    }
}
