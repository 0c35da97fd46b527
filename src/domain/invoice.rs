use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{lenient_number, OrderId};

/// Invoice the backend derives from an order. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "InvoiceID")]
    pub id: u64,
    #[serde(rename = "OrderId")]
    pub order_id: OrderId,
    #[serde(rename = "VendorName", default)]
    pub vendor_name: String,
    #[serde(rename = "InvoiceDate", default)]
    pub invoice_date: Option<String>,
    #[serde(rename = "DueDate", default)]
    pub due_date: Option<String>,
    #[serde(rename = "Subtotal", default, deserialize_with = "lenient_number")]
    pub subtotal: f64,
    #[serde(rename = "Tax", default, deserialize_with = "lenient_number")]
    pub tax: f64,
    #[serde(rename = "Discount", default, deserialize_with = "lenient_number")]
    pub discount: f64,
    #[serde(rename = "TotalAmount", default, deserialize_with = "lenient_number")]
    pub total_amount: f64,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "orderDetails", default)]
    pub lines: Vec<InvoiceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "VendorMaterial")]
    pub material: InvoiceMaterial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMaterial {
    #[serde(rename = "MaterialName")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_number")]
    pub price: f64,
}

impl InvoiceLine {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.material.price
    }
}

/// Renders a backend timestamp as a `d/m/yyyy` date. Unparseable values are
/// shown as sent.
pub fn format_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%-d/%-m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}
