//! # Generic Client
//!
//! The client half of a record actor.

use crate::error::FrameworkError;
use crate::message::RecordRequest;
use crate::record::{Record, RowId};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `RecordActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be moved into
/// other tasks. When the last clone is dropped the actor shuts down.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, record: T) -> Result<RowId, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Insert { record, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns every stored record in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
