//! # Record Actor
//!
//! Building blocks for hosting a remote-style record collection inside the process.
//! Each collection is a [`RecordActor`] that owns an ordered store of records in its own
//! Tokio task, and every caller talks to it through a cheap, cloneable [`RecordClient`].
//!
//! The order-history view uses two of these: one for orders and one for order items.
//! They stand in for the remote services the view fetches from, so the join and the
//! presentation state can be exercised end to end without a network.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - the wire record and its insert-time validation
//! 2. **Runtime Layer** ([`RecordActor`]) - message processing and ordered storage
//! 3. **Interface Layer** ([`RecordClient`], [`ServiceClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use record_actor::{Record, RecordActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Line { sku: String, quantity: i64 }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("negative quantity")]
//! struct LineError;
//!
//! #[async_trait]
//! impl Record for Line {
//!     type Error = LineError;
//!
//!     async fn on_insert(&self) -> Result<(), Self::Error> {
//!         if self.quantity < 0 { return Err(LineError); }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Line>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client.insert(Line { sku: "A-1".into(), quantity: 2 }).await.unwrap();
//!     assert!(client.insert(Line { sku: "A-2".into(), quantity: -1 }).await.is_err());
//!
//!     let lines = client.list().await.unwrap();
//!     assert_eq!(lines.len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor, so the store needs no locks
//! - Dropping every client closes the channel and the actor loop exits
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of a real
//! store, which makes fetch failures trivial to simulate.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod tracing;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::ServiceClient;
pub use error::FrameworkError;
pub use message::{RecordRequest, Response};
pub use record::{Record, RowId};
