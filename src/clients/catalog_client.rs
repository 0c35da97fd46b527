use crate::domain::VendorMaterial;
use crate::material_actor::InventoryError;

/// Client for the vendor material catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: crate::actor_framework::ResourceClient<VendorMaterial>,
}

impl_client_new!(CatalogClient, VendorMaterial);
impl_list_method!(CatalogClient, VendorMaterial, InventoryError, material);
