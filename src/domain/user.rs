use serde::{Deserialize, Serialize};

use crate::search::{contains_ignore_case, Searchable};

pub type UserId = u64;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_VENDOR: &str = "vendor";
pub const ROLE_PROJECT_MANAGER: &str = "ProjectManager";

/// Represents a registered platform user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: UserId,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "vendorDetails", default, skip_serializing_if = "Option::is_none")]
    pub vendor_details: Option<VendorProfile>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor_details.as_ref().map(|profile| profile.vendor_name.as_str())
    }
}

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.username, needle)
            || contains_ignore_case(&self.email, needle)
            || self
                .vendor_name()
                .is_some_and(|name| contains_ignore_case(name, needle))
    }
}

/// Vendor company profile attached to users with the `vendor` role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VendorProfile {
    pub vendor_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub contact_person: Option<String>,
    pub goods_or_services: Option<String>,
    pub payment_method: Option<String>,
    pub payment_terms: Option<String>,
    #[serde(rename = "NPWP")]
    pub npwp: Option<String>,
    pub bank_details: Option<String>,
    pub notes: Option<String>,
}

impl VendorProfile {
    /// Labelled fields in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        fn optional(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }
        vec![
            ("Vendor Name", self.vendor_name.as_str()),
            ("Address", optional(&self.address)),
            ("City", optional(&self.city)),
            ("State", optional(&self.state)),
            ("Zip Code", optional(&self.zip_code)),
            ("Country", optional(&self.country)),
            ("Phone Number", optional(&self.phone_number)),
            ("Email", optional(&self.email)),
            ("Website", optional(&self.website)),
            ("Contact Person", optional(&self.contact_person)),
            ("Goods or Services", optional(&self.goods_or_services)),
            ("Payment Method", optional(&self.payment_method)),
            ("Payment Terms", optional(&self.payment_terms)),
            ("NPWP", optional(&self.npwp)),
            ("Bank Details", optional(&self.bank_details)),
            ("Notes", optional(&self.notes)),
        ]
    }
}

/// Body of the register call. Vendor fields are only sent for vendors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}
