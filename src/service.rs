//! Contracts of the two remote collaborators the view fetches from.
//!
//! The loader only sees these traits. [`OrderClient`](crate::clients::OrderClient) and
//! [`OrderItemClient`](crate::clients::OrderItemClient) implement them over in-process
//! record services; any other transport can be plugged in the same way.

use crate::model::{Order, OrderItem};
use async_trait::async_trait;
use record_actor::FrameworkError;
use thiserror::Error;

/// Errors returned by a service call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The service could not be reached or dropped the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response did not match the wire schema.
    #[error("decode error: {0}")]
    Decode(String),

    /// The service refused a record on insert.
    #[error("record rejected: {0}")]
    Rejected(String),
}

impl From<FrameworkError> for ServiceError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(reason) => ServiceError::Rejected(reason.to_string()),
            other => ServiceError::Transport(other.to_string()),
        }
    }
}

/// The order service: `fetchOrders() -> Order[]`.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>, ServiceError>;
}

/// The order item service: `fetchOrderItems() -> OrderItem[]`.
#[async_trait]
pub trait OrderItemSource: Send + Sync {
    async fn fetch_order_items(&self) -> Result<Vec<OrderItem>, ServiceError>;
}
