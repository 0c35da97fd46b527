use crate::domain::Invoice;
use crate::transport::Ack;

/// Custom actions for Order resources.
///
/// These are the order endpoints beyond list/create.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Marks a delivered order as received by the company.
    Receive,
    /// Fetches the invoice the backend derived from the order.
    Invoice,
    /// Books a received order into warehouse stock.
    UpdateInventory,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Received(Ack),
    Invoice(Invoice),
    InventoryUpdated(Ack),
}
