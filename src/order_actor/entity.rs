use serde_json::Value;

use crate::actor_framework::{FrameworkError, Resource};
use crate::domain::{NewOrder, Order, OrderId};
use crate::transport::{unwrap_item, Ack, Route};
use super::actions::{OrderAction, OrderActionResult};

impl Resource for Order {
    type Id = OrderId;
    type CreatePayload = NewOrder;
    type Patch = (); // Orders only change through actions
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    const NAME: &'static str = "order";
    const LIST_KEY: Option<&'static str> = Some("orders");

    fn list_route() -> Option<Route> {
        Some(Route::get("order/orders"))
    }

    fn create_route() -> Option<Route> {
        Some(Route::post("order/newOrder"))
    }

    fn action_route(id: &OrderId, action: &OrderAction) -> Option<Route> {
        Some(match action {
            OrderAction::Receive => Route::post(format!("order/orders/{}/receive", id)),
            OrderAction::Invoice => Route::get(format!("order/invoice/{}", id)),
            OrderAction::UpdateInventory => Route::post(format!("order/updateInventory/{}", id)),
        })
    }

    /// Handles order-specific action replies.
    ///
    /// # Actions
    /// - `Receive`: acknowledgement message
    /// - `Invoice`: the invoice, wrapped in `{ "invoice": ... }`
    /// - `UpdateInventory`: acknowledgement message
    fn decode_action(action: &OrderAction, body: Value) -> Result<OrderActionResult, FrameworkError> {
        match action {
            OrderAction::Receive => Ok(OrderActionResult::Received(Ack::from_body(&body))),
            OrderAction::Invoice => unwrap_item(body, Some("invoice")).map(OrderActionResult::Invoice),
            OrderAction::UpdateInventory => Ok(OrderActionResult::InventoryUpdated(Ack::from_body(&body))),
        }
    }
}
