use serde::{Deserialize, Serialize};

use crate::domain::{lenient_count, lenient_number, OrderId, ProjectId};

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    #[serde(deserialize_with = "lenient_number")]
    pub total_invoice_amount: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_orders: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_users: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_projects: u64,
    pub project_durations: Vec<ProjectDuration>,
    pub order_status_distribution: Vec<OrderStatusCount>,
    pub project_status_overview: Vec<ProjectStatusCount>,
    pub recent_projects: Vec<RecentProject>,
    pub recent_invoices: Vec<RecentInvoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDuration {
    #[serde(rename = "nama_project")]
    pub project_name: String,
    /// Days.
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusCount {
    #[serde(rename = "Shipping")]
    pub shipping: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatusCount {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentProject {
    #[serde(rename = "projectID")]
    pub id: ProjectId,
    #[serde(rename = "nama_project")]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentInvoice {
    #[serde(rename = "InvoiceID")]
    pub id: u64,
    #[serde(rename = "OrderId")]
    pub order_id: OrderId,
    #[serde(rename = "TotalAmount", default, deserialize_with = "lenient_number")]
    pub total_amount: f64,
}

/// Highlight class for a project or order status on the dashboard lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Pending,
    Delivered,
    Received,
    Plain,
}

impl StatusClass {
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "pending" => StatusClass::Pending,
            "delivered" | "in progress" => StatusClass::Delivered,
            "received" | "completed" => StatusClass::Received,
            _ => StatusClass::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_metrics_with_string_aggregates() {
        let metrics: DashboardMetrics = serde_json::from_value(json!({
            "totalInvoiceAmount": "2500000",
            "totalOrders": 12,
            "totalUsers": "4",
            "totalProjects": 3,
            "orderStatusDistribution": [{ "Shipping": "Pending", "count": "7" }],
            "recentInvoices": [{ "InvoiceID": 1, "OrderId": 2, "TotalAmount": 10000 }]
        }))
        .unwrap();

        assert_eq!(metrics.total_invoice_amount, 2_500_000.0);
        assert_eq!(metrics.total_users, 4);
        assert_eq!(metrics.order_status_distribution[0].count, 7);
        assert!(metrics.project_durations.is_empty());
    }

    #[test]
    fn status_classes_ignore_case() {
        assert_eq!(StatusClass::for_status("PENDING"), StatusClass::Pending);
        assert_eq!(StatusClass::for_status("In Progress"), StatusClass::Delivered);
        assert_eq!(StatusClass::for_status("Completed"), StatusClass::Received);
        assert_eq!(StatusClass::for_status("Cancelled"), StatusClass::Plain);
    }
}
