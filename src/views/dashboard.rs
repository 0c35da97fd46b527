use tracing::{error, info};

use crate::clients::DashboardClient;
use crate::domain::DashboardMetrics;

/// Headline figures and recent activity.
pub struct DashboardSummary {
    client: DashboardClient,
    metrics: Option<DashboardMetrics>,
}

impl DashboardSummary {
    pub fn new(client: DashboardClient) -> Self {
        Self { client, metrics: None }
    }

    /// A failed fetch leaves the summary empty.
    pub async fn load(&mut self) {
        self.metrics = match self.client.metrics().await {
            Ok(metrics) => {
                info!(orders = metrics.total_orders, projects = metrics.total_projects, "Dashboard loaded");
                Some(metrics)
            }
            Err(e) => {
                error!(error = %e, "Failed to load dashboard");
                None
            }
        };
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }
}
