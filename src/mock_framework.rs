//! # Mock Framework
//!
//! Utilities for testing clients and handlers without a running actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_replace`] to assert behavior
//! and script the actor's answer.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// Messages sent through the client land on `receiver`, where the test can
/// inspect them and answer with success, failure, or by dropping the responder.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Replace { id, item, respond_to }) => Some((id, item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::domain::Product;
    use crate::product_actor::ProductError;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let replace_task = tokio::spawn(async move {
            client.replace_product(1, Product::new(1, "A", "B", 1, 0, 1)).await
        });

        let (id, item, responder) = expect_replace(&mut receiver).await.expect("Expected Replace request");
        assert_eq!(id, 1);
        assert_eq!(item.sku, "A");
        responder.send(Ok(())).unwrap();

        assert_eq!(replace_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let get_task = tokio::spawn(async move { client.fetch_product(5).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 5);
        drop(responder);

        assert_eq!(
            get_task.await.unwrap(),
            Err(ProductError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
