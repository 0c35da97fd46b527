use tracing::{error, info, instrument};

use crate::clients::OrderClient;
use crate::domain::{Invoice, Order, OrderId};
use crate::notice::Notice;
use crate::order_actor::OrderError;
use crate::search;

/// Actions the admin may take on a listed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderActionKind {
    ViewInvoice,
    MarkReceived,
}

/// The admin's order list.
pub struct OrderTracker {
    client: OrderClient,
    orders: Vec<Order>,
    query: String,
}

impl OrderTracker {
    pub fn new(client: OrderClient) -> Self {
        Self { client, orders: Vec::new(), query: String::new() }
    }

    /// Re-fetches all orders. A failed fetch leaves the list empty.
    pub async fn load(&mut self) {
        match self.client.list_orders().await {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
            }
            Err(e) => {
                error!(error = %e, "Failed to load orders");
                self.orders.clear();
            }
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Order> {
        search::filter(&self.orders, &self.query)
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn available_actions(order: &Order) -> Vec<OrderActionKind> {
        let mut actions = vec![OrderActionKind::ViewInvoice];
        if order.is_delivered() {
            actions.push(OrderActionKind::MarkReceived);
        }
        actions
    }

    /// Confirms receipt of a delivered order, then re-fetches the list. Orders
    /// in any other state are refused without contacting the backend.
    #[instrument(skip(self))]
    pub async fn mark_received(&mut self, id: OrderId) -> Notice {
        let check = match self.find(id) {
            None => Err(OrderError::NotFound(id)),
            Some(order) if !order.is_delivered() => Err(OrderError::NotDelivered {
                id,
                status: order.shipping.clone(),
            }),
            Some(_) => Ok(()),
        };
        if let Err(e) = check {
            return Notice::failure(&e, "Failed to receive order.");
        }

        let result = self.client.receive_order(id).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(&result, "Order marked as received.", "Failed to receive order.")
    }

    pub async fn view_invoice(&self, id: OrderId) -> Result<Invoice, OrderError> {
        self.client.get_invoice(id).await
    }

    /// Books a received order's goods into warehouse stock.
    #[instrument(skip(self))]
    pub async fn update_inventory(&mut self, id: OrderId) -> Notice {
        let result = self.client.update_inventory(id).await;
        if result.is_ok() {
            self.load().await;
        }
        Notice::outcome(&result, "Inventory updated.", "Failed to update inventory.")
    }
}
