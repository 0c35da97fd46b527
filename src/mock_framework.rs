//! # Mock Framework
//!
//! Utilities for testing clients and views without a backend.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert
//! each request and answer it.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{FrameworkError, Resource, ResourceClient, ResourceRequest};
use crate::transport::Ack;

pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a client whose requests arrive on the returned receiver instead of
/// at a resource service. The test plays the service: it inspects each
/// request and sends the reply, so success, failure and ordering are fully
/// deterministic.
pub fn create_mock_client<T: Resource>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Resource>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Responder<Ack>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Ack>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MaterialInput, WarehouseMaterial};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<WarehouseMaterial>(10);

        let create_task = tokio::spawn(async move {
            let input = MaterialInput { name: Some("Rebar".into()), ..Default::default() };
            client.create(input).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name.as_deref(), Some("Rebar"));
        responder.send(Ok(Ack { message: Some("Material added".into()) })).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(Ack { message: Some("Material added".into()) }));
    }
}
