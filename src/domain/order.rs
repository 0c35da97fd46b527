use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{lenient_number, MaterialId, VendorId};
use crate::search::Searchable;

pub type OrderId = u64;

/// Represents a purchase order placed with one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub id: OrderId,
    #[serde(rename = "VendorID")]
    pub vendor_id: VendorId,
    #[serde(rename = "TotalAmount", default, deserialize_with = "lenient_number")]
    pub total_amount: f64,
    /// Raw shipping status as sent by the backend.
    #[serde(rename = "Shipping", default)]
    pub shipping: String,
}

/// Order lifecycle stage. `Pending -> Delivered` is driven by the backend,
/// `Delivered -> Received` by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum ShippingStatus {
    Pending,
    Delivered,
    Received,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown shipping status: {0:?}")]
pub struct UnknownShippingStatus(pub String);

impl ShippingStatus {
    pub fn parse(raw: &str) -> Result<Self, UnknownShippingStatus> {
        Self::from_str(raw).map_err(|_| UnknownShippingStatus(raw.to_owned()))
    }

    /// Tag colour used when listing orders.
    pub fn colour(&self) -> &'static str {
        match self {
            ShippingStatus::Delivered => "blue",
            ShippingStatus::Received => "green",
            _ => "orange",
        }
    }
}

impl Order {
    pub fn new(id: OrderId, vendor_id: VendorId, total_amount: f64, shipping: ShippingStatus) -> Self {
        Self {
            id,
            vendor_id,
            total_amount,
            shipping: shipping.to_string(),
        }
    }

    pub fn status(&self) -> Result<ShippingStatus, UnknownShippingStatus> {
        ShippingStatus::parse(&self.shipping)
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.status(), Ok(ShippingStatus::Delivered))
    }
}

impl Searchable for Order {
    fn matches(&self, needle: &str) -> bool {
        self.id.to_string().contains(needle)
    }
}

/// One line of an order-creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    #[serde(rename = "VendorMaterialID")]
    pub material_id: MaterialId,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

/// Order-creation request; every line belongs to `vendor_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    #[serde(rename = "VendorID")]
    pub vendor_id: VendorId,
    pub items: Vec<OrderLine>,
}
