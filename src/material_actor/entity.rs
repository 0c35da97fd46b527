use serde_json::Value;

use crate::actor_framework::{FrameworkError, Resource};
use crate::domain::{Expenditure, MaterialId, MaterialInput, NewExpenditure, VendorMaterial, WarehouseMaterial};
use crate::transport::Route;

/// Vendor catalog: read-only list of orderable materials.
impl Resource for VendorMaterial {
    type Id = MaterialId;
    type CreatePayload = ();
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "vendor material";
    const LIST_KEY: Option<&'static str> = Some("materials");

    fn list_route() -> Option<Route> {
        Some(Route::get("order/materials"))
    }

    fn action_route(_id: &MaterialId, _action: &()) -> Option<Route> {
        None
    }

    fn decode_action(_action: &(), _body: Value) -> Result<(), FrameworkError> {
        Ok(())
    }
}

/// Warehouse stock, managed by the admin.
impl Resource for WarehouseMaterial {
    type Id = MaterialId;
    type CreatePayload = MaterialInput;
    type Patch = MaterialInput;
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "warehouse material";
    const LIST_KEY: Option<&'static str> = Some("materials");
    const ITEM_KEY: Option<&'static str> = Some("material");

    fn list_route() -> Option<Route> {
        Some(Route::get("admin/allMaterials"))
    }

    fn get_route(id: &MaterialId) -> Option<Route> {
        Some(Route::get(format!("admin/getMaterial/{}", id)))
    }

    fn create_route() -> Option<Route> {
        Some(Route::post("admin/newMaterial"))
    }

    fn update_route(id: &MaterialId) -> Option<Route> {
        Some(Route::put(format!("admin/editMaterial/{}", id)))
    }

    fn delete_route(id: &MaterialId) -> Option<Route> {
        Some(Route::delete(format!("admin/deleteMaterial/{}", id)))
    }

    fn action_route(_id: &MaterialId, _action: &()) -> Option<Route> {
        None
    }

    fn decode_action(_action: &(), _body: Value) -> Result<(), FrameworkError> {
        Ok(())
    }
}

impl Resource for Expenditure {
    type Id = u64;
    type CreatePayload = NewExpenditure;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "expenditure";
    const LIST_KEY: Option<&'static str> = Some("expenditures");

    fn list_route() -> Option<Route> {
        Some(Route::get("admin/expenditures"))
    }

    fn create_route() -> Option<Route> {
        Some(Route::post("admin/addExpenditure"))
    }

    fn action_route(_id: &u64, _action: &()) -> Option<Route> {
        None
    }

    fn decode_action(_action: &(), _body: Value) -> Result<(), FrameworkError> {
        Ok(())
    }
}
