use tracing::{debug, instrument};

use crate::actor_framework::FrameworkError;
use crate::domain::DashboardMetrics;
use crate::transport::{unwrap_item, HttpTransport};

/// Fetches the dashboard aggregates. The backend computes them in one call,
/// so there is no resource service behind this client.
#[derive(Clone)]
pub struct DashboardClient {
    transport: HttpTransport,
}

impl DashboardClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn metrics(&self) -> Result<DashboardMetrics, FrameworkError> {
        debug!("Sending request");
        let body = self.transport.get_json("dashboard").await?;
        unwrap_item(body, None)
    }
}
