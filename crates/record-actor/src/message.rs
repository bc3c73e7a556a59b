//! # Record Messages
//!
//! Messages exchanged between a [`RecordClient`](crate::RecordClient) and its
//! [`RecordActor`](crate::RecordActor).

use crate::error::FrameworkError;
use crate::record::{Record, RowId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a record actor.
///
/// A record service is read-mostly: callers seed it with `Insert` and the view reads it
/// back in one `List`.
#[derive(Debug)]
pub enum RecordRequest<T: Record> {
    Insert {
        record: T,
        respond_to: Response<RowId>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
