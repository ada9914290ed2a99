//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls instead of a running
/// actor, so the test can inspect each request and answer it by hand.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<T::Snapshot>> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Action, oneshot::Sender<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::SessionClient;
    use crate::domain::{ProductId, Quantity};
    use crate::session_actor::{ActionOutcome, Session, SessionAction};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Session>(10);
        let client = SessionClient::new(inner);

        let task = tokio::spawn(async move { client.increment_row(ProductId(4)).await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, SessionAction::IncrementRow(ProductId(4)));
        let outcome = ActionOutcome::QuantityChanged {
            product: ProductId(4),
            quantity: Quantity::ONE.increment(),
        };
        responder.send(outcome.clone()).unwrap();

        assert_eq!(task.await.unwrap(), Ok(outcome));
    }
}
