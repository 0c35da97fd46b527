use tracing::{error, info};

use crate::actor_framework::{FrameworkError, ResourceActor};
use crate::clients::{
    AuthClient, CatalogClient, DashboardClient, ExpenditureClient, MaterialClient, OrderClient, ProjectClient,
    UserClient,
};
use crate::config::AdminConfig;
use crate::domain::{Expenditure, Order, Project, User, VendorMaterial, WarehouseMaterial};
use crate::transport::HttpTransport;

/// The admin application: one resource service per backend resource, all
/// sharing a single HTTP transport, plus the clients that talk to them.
///
/// Clients are cheap to clone. Services stop once every clone of their
/// client is dropped.
pub struct AdminSystem {
    pub catalog_client: CatalogClient,
    pub material_client: MaterialClient,
    pub expenditure_client: ExpenditureClient,
    pub order_client: OrderClient,
    pub project_client: ProjectClient,
    pub user_client: UserClient,
    pub auth_client: AuthClient,
    pub dashboard_client: DashboardClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    pub fn new(config: &AdminConfig) -> Result<Self, FrameworkError> {
        let transport = HttpTransport::new(config.base_url.clone(), config.request_timeout())?;
        Ok(Self::with_transport(transport, config.channel_buffer))
    }

    /// Must be called from within a tokio runtime.
    pub fn with_transport(transport: HttpTransport, buffer: usize) -> Self {
        let mut handles = Vec::new();

        let (actor, client) = ResourceActor::<VendorMaterial>::new(buffer, transport.clone());
        let catalog_client = CatalogClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        let (actor, client) = ResourceActor::<WarehouseMaterial>::new(buffer, transport.clone());
        let material_client = MaterialClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        let (actor, client) = ResourceActor::<Expenditure>::new(buffer, transport.clone());
        let expenditure_client = ExpenditureClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        let (actor, client) = ResourceActor::<Order>::new(buffer, transport.clone());
        let order_client = OrderClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        let (actor, client) = ResourceActor::<Project>::new(buffer, transport.clone());
        let project_client = ProjectClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        let (actor, client) = ResourceActor::<User>::new(buffer, transport.clone());
        let user_client = UserClient::new(client);
        handles.push(tokio::spawn(actor.run()));

        info!(base_url = %transport.base_url(), services = handles.len(), "Admin system started");

        Self {
            catalog_client,
            material_client,
            expenditure_client,
            order_client,
            project_client,
            user_client,
            auth_client: AuthClient::new(transport.clone()),
            dashboard_client: DashboardClient::new(transport),
            handles,
        }
    }

    /// Closes every service channel and waits for the services to drain.
    /// Clones of the clients handed out earlier must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.catalog_client);
        drop(self.material_client);
        drop(self.expenditure_client);
        drop(self.order_client);
        drop(self.project_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Resource service failed: {:?}", e);
                return Err(format!("Resource service failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
