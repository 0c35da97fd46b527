use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::transport::{unwrap_item, unwrap_list, Ack, HttpTransport, Route};

// =============================================================================
// 1. THE ABSTRACTION (Remote resources, their routes and actions)
// =============================================================================

/// Failures shared by every resource service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Backend rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("{resource} does not support {operation}")]
    Unsupported { resource: &'static str, operation: &'static str },
    #[error("Resource service closed")]
    ServiceClosed,
}

impl FrameworkError {
    /// The message the backend attached to a rejection, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            FrameworkError::Rejected { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }
}

/// A record owned by the backend that a [`ResourceActor`] can list, fetch,
/// create, update, delete and run custom actions on.
///
/// Each operation is optional: a resource only exposes the routes the backend
/// actually has, and the service answers [`FrameworkError::Unsupported`] for
/// the rest.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: Clone + Send + Sync + Display + Debug + 'static;
    type CreatePayload: Serialize + Send + Sync + Debug + 'static;
    type Patch: Serialize + Send + Sync + Debug + 'static;
    type Action: Send + Sync + Debug + 'static;
    type ActionResult: Send + Sync + Debug + 'static;

    const NAME: &'static str;
    /// Envelope key wrapping list responses.
    const LIST_KEY: Option<&'static str> = None;
    /// Envelope key wrapping single-record responses.
    const ITEM_KEY: Option<&'static str> = None;

    fn list_route() -> Option<Route> {
        None
    }

    fn get_route(_id: &Self::Id) -> Option<Route> {
        None
    }

    fn create_route() -> Option<Route> {
        None
    }

    fn update_route(_id: &Self::Id) -> Option<Route> {
        None
    }

    fn delete_route(_id: &Self::Id) -> Option<Route> {
        None
    }

    fn action_route(id: &Self::Id, action: &Self::Action) -> Option<Route>;

    /// Turn the backend's answer to `action` into a typed result.
    fn decode_action(action: &Self::Action, body: Value) -> Result<Self::ActionResult, FrameworkError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        payload: T::CreatePayload,
        respond_to: Response<Ack>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<Ack>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Ack>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Serves one backend resource. Requests are handled strictly one at a time,
/// each awaited to completion before the next is read.
pub struct ResourceActor<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    transport: HttpTransport,
}

fn unsupported<T: Resource>(operation: &'static str) -> FrameworkError {
    FrameworkError::Unsupported { resource: T::NAME, operation }
}

impl<T: Resource> ResourceActor<T> {
    pub fn new(buffer_size: usize, transport: HttpTransport) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, transport };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_service", skip(self), fields(resource = T::NAME))]
    pub async fn run(mut self) {
        info!("Resource service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(self.handle_list().await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id).await);
                }
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload).await);
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id).await);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action).await);
                }
            }
        }
        info!("Resource service stopped");
    }

    #[instrument(skip(self))]
    async fn handle_list(&self) -> Result<Vec<T>, FrameworkError> {
        debug!("Processing list request");
        let route = T::list_route().ok_or_else(|| unsupported::<T>("list"))?;
        let reply = self.transport.send::<()>(&route, None).await?;
        let items = unwrap_list(reply.body, T::LIST_KEY)?;
        info!(count = items.len(), "Listed records");
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn handle_get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        debug!("Processing get request");
        let route = T::get_route(&id).ok_or_else(|| unsupported::<T>("get"))?;
        match self.transport.send::<()>(&route, None).await {
            Ok(reply) => unwrap_item(reply.body, T::ITEM_KEY).map(Some),
            Err(FrameworkError::Rejected { status: 404, .. }) => {
                debug!("Record not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, payload))]
    async fn handle_create(&self, payload: T::CreatePayload) -> Result<Ack, FrameworkError> {
        debug!("Processing create request");
        let route = T::create_route().ok_or_else(|| unsupported::<T>("create"))?;
        let reply = self.transport.send(&route, Some(&payload)).await?;
        info!(status = reply.status, "Record created");
        Ok(Ack::from_body(&reply.body))
    }

    #[instrument(skip(self, patch))]
    async fn handle_update(&self, id: T::Id, patch: T::Patch) -> Result<Ack, FrameworkError> {
        debug!("Processing update request");
        let route = T::update_route(&id).ok_or_else(|| unsupported::<T>("update"))?;
        let reply = self.transport.send(&route, Some(&patch)).await?;
        info!("Record updated");
        Ok(Ack::from_body(&reply.body))
    }

    #[instrument(skip(self))]
    async fn handle_delete(&self, id: T::Id) -> Result<Ack, FrameworkError> {
        debug!("Processing delete request");
        let route = T::delete_route(&id).ok_or_else(|| unsupported::<T>("delete"))?;
        let reply = self.transport.send::<()>(&route, None).await?;
        info!("Record deleted");
        Ok(Ack::from_body(&reply.body))
    }

    #[instrument(skip(self))]
    async fn handle_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        debug!("Processing action request");
        let route = T::action_route(&id, &action).ok_or_else(|| unsupported::<T>("this action"))?;
        let reply = self.transport.send::<()>(&route, None).await.map_err(|e| {
            warn!(error = %e, "Action failed");
            e
        })?;
        T::decode_action(&action, reply.body)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Resource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ServiceClosed)?;
        response.await.map_err(|_| FrameworkError::ServiceClosed)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<Ack, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<Ack, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Ack, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
