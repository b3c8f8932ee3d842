//! # Mock Framework
//!
//! Utilities for testing the storefront client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_add_to_basket`] to assert behavior.

use tokio::sync::mpsc;

use crate::clients::StorefrontClient;
use crate::domain::{ProductId, SortOption};
use crate::error::StorefrontError;
use crate::messages::{ServiceResponse, StorefrontRequest};

/// Creates a client whose requests land on a receiver the test controls,
/// so the test can play the part of the session actor.
pub fn create_mock_client(buffer_size: usize) -> (StorefrontClient, mpsc::Receiver<StorefrontRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StorefrontClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SetSearchTerm request
pub async fn expect_set_search_term(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(String, ServiceResponse<usize, StorefrontError>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::SetSearchTerm { search_term, respond_to }) => Some((search_term, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SetSortOption request
pub async fn expect_set_sort_option(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(SortOption, ServiceResponse<usize, StorefrontError>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::SetSortOption { sort_option, respond_to }) => Some((sort_option, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an AddToBasket request
pub async fn expect_add_to_basket(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ProductId, ServiceResponse<u32, StorefrontError>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::AddToBasket { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RemoveFromBasket request
pub async fn expect_remove_from_basket(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ProductId, ServiceResponse<u32, StorefrontError>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::RemoveFromBasket { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown(receiver: &mut mpsc::Receiver<StorefrontRequest>) -> bool {
    matches!(receiver.recv().await, Some(StorefrontRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_basket(7).await });

        let (product_id, responder) = expect_add_to_basket(&mut receiver).await.expect("Expected AddToBasket request");
        assert_eq!(product_id, 7);
        responder.send(Ok(1)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_query_inputs_are_forwarded() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            let by_term = client.set_search_term("lamp".to_string()).await;
            let by_sort = client.set_sort_option(SortOption::RatingDesc).await;
            (by_term, by_sort)
        });

        let (term, responder) = expect_set_search_term(&mut receiver).await.expect("Expected SetSearchTerm request");
        assert_eq!(term, "lamp");
        responder.send(Ok(1)).unwrap();

        let (option, responder) = expect_set_sort_option(&mut receiver).await.expect("Expected SetSortOption request");
        assert_eq!(option, SortOption::RatingDesc);
        responder.send(Ok(1)).unwrap();

        assert_eq!(task.await.unwrap(), (Ok(1), Ok(1)));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let remove_task = tokio::spawn(async move { client.remove_from_basket(3).await });

        let (product_id, responder) = expect_remove_from_basket(&mut receiver).await.expect("Expected RemoveFromBasket request");
        assert_eq!(product_id, 3);
        drop(responder);

        let result = remove_task.await.unwrap();
        assert_eq!(result, Err(StorefrontError::ActorCommunicationError("Actor dropped".to_string())));
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        client.shutdown().await.unwrap();
        assert!(expect_shutdown(&mut receiver).await);
        drop(receiver);

        let result = client.show_basket().await;
        assert_eq!(result, Err(StorefrontError::ActorCommunicationError("Actor closed".to_string())));
    }
}
