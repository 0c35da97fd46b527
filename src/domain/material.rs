use serde::{Deserialize, Serialize};

use crate::domain::lenient_number;
use crate::search::{contains_ignore_case, Searchable};

pub type MaterialId = u64;
pub type VendorId = u64;

/// A material a vendor offers for ordering (catalog entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorMaterial {
    #[serde(rename = "VendorMaterialId")]
    pub id: MaterialId,
    #[serde(rename = "MaterialName")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Unit", default)]
    pub unit: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_number")]
    pub price: f64,
    /// Quantity on hand at the vendor.
    #[serde(rename = "Quantity", default)]
    pub quantity: i64,
    #[serde(rename = "VendorId")]
    pub vendor_id: VendorId,
    #[serde(rename = "Vendor", default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<VendorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    #[serde(rename = "VendorName")]
    pub name: String,
}

impl VendorMaterial {
    pub fn new(id: MaterialId, name: impl Into<String>, vendor_id: VendorId, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            unit: String::new(),
            price,
            quantity,
            vendor_id,
            vendor: None,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity >= 1
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock() {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }

    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor.as_ref().map(|vendor| vendor.name.as_str())
    }
}

impl Searchable for VendorMaterial {
    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }
}

/// A material held in the company warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseMaterial {
    #[serde(rename = "WarehouseMaterialID")]
    pub id: MaterialId,
    #[serde(rename = "MaterialName")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Unit", default)]
    pub unit: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: i64,
}

/// Warehouse stock thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum StockLevel {
    #[strum(serialize = "Out of stock")]
    Out,
    #[strum(serialize = "Low stock")]
    Low,
    #[strum(serialize = "OK")]
    Ok,
}

pub const LOW_STOCK_THRESHOLD: i64 = 10;

impl WarehouseMaterial {
    pub fn stock_level(&self) -> StockLevel {
        match self.quantity {
            q if q <= 0 => StockLevel::Out,
            q if q < LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Ok,
        }
    }
}

impl Searchable for WarehouseMaterial {
    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }
}

/// Body for adding or editing a warehouse material.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaterialInput {
    #[serde(rename = "MaterialName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Unit", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_catalog_entry() {
        let material: VendorMaterial = serde_json::from_value(json!({
            "VendorMaterialId": 11,
            "MaterialName": "Semen Portland",
            "Description": "50kg sack",
            "Unit": "sak",
            "Price": 65000,
            "Quantity": 0,
            "VendorId": 4,
            "Vendor": { "VendorName": "PT Beton Jaya" }
        }))
        .unwrap();

        assert_eq!(material.vendor_id, 4);
        assert_eq!(material.vendor_name(), Some("PT Beton Jaya"));
        assert!(!material.in_stock());
        assert_eq!(material.stock_label(), "Out of Stock");
    }

    #[test]
    fn catalog_accepts_prices_sent_as_numeric_strings() {
        let body = json!({ "materials": [
            { "VendorMaterialId": 1, "MaterialName": "Cement", "Price": "65000.00", "Quantity": 5, "VendorId": 2 },
            { "VendorMaterialId": 2, "MaterialName": "Sand", "Price": 10000, "Quantity": 5, "VendorId": 3 }
        ]});
        let catalog: Vec<VendorMaterial> = crate::transport::unwrap_list(body, Some("materials")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].price, 65_000.0);
        assert_eq!(catalog[1].price, 10_000.0);
    }

    #[test]
    fn stock_level_thresholds() {
        let mut material = WarehouseMaterial {
            id: 1,
            name: "Rebar".into(),
            description: String::new(),
            unit: "pcs".into(),
            quantity: 0,
        };
        assert_eq!(material.stock_level(), StockLevel::Out);
        material.quantity = 5;
        assert_eq!(material.stock_level(), StockLevel::Low);
        material.quantity = 10;
        assert_eq!(material.stock_level(), StockLevel::Ok);
    }

    #[test]
    fn material_input_only_sends_present_fields() {
        let input = MaterialInput { quantity: Some(40), ..Default::default() };
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "Quantity": 40 }));
    }
}
