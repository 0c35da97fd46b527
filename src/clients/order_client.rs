use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Invoice, NewOrder, Order, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::transport::Ack;

/// Client for interacting with the Order resource service.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_client_new!(OrderClient, Order);
impl_list_method!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self, order), fields(vendor_id = order.vendor_id, lines = order.items.len()))]
    pub async fn create_order(&self, order: NewOrder) -> Result<Ack, OrderError> {
        debug!("Sending request");
        let ack = self.inner.create(order).await.map_err(|e| {
            error!(error = %e, "Order creation failed");
            OrderError::from(e)
        })?;
        info!(message = ?ack.message, "Order created");
        Ok(ack)
    }

    #[instrument(skip(self))]
    pub async fn receive_order(&self, id: OrderId) -> Result<Ack, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Receive).await? {
            OrderActionResult::Received(ack) => Ok(ack),
            _ => Err(OrderError::UnexpectedReply),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_invoice(&self, id: OrderId) -> Result<Invoice, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Invoice).await {
            Ok(OrderActionResult::Invoice(invoice)) => Ok(invoice),
            Ok(_) => Err(OrderError::UnexpectedReply),
            Err(crate::actor_framework::FrameworkError::Rejected { status: 404, .. }) => {
                Err(OrderError::NotFound(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_inventory(&self, id: OrderId) -> Result<Ack, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::UpdateInventory).await? {
            OrderActionResult::InventoryUpdated(ack) => Ok(ack),
            _ => Err(OrderError::UnexpectedReply),
        }
    }
}
