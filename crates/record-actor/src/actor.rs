//! # Record Actor Server
//!
//! The `RecordActor` owns an ordered record store and processes requests sequentially,
//! which gives it exclusive access to the store without locks.

use crate::client::RecordClient;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use crate::record::{Record, RowId};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `RecordActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the records are needed.
///
/// ```rust
/// use record_actor::{Record, RecordActor};
///
/// #[derive(Clone, Debug)]
/// struct Note(String);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl Record for Note {
///     type Error = NoteError;
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Note>::new(10);
///     let handle = tokio::spawn(actor.run());
///
///     client.insert(Note("first".into())).await.unwrap();
///     client.insert(Note("second".into())).await.unwrap();
///     let notes = client.list().await.unwrap();
///     assert_eq!(notes[0].0, "first");
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `BTreeMap` keyed by [`RowId`]. Row ids are handed out from a counter
/// starting at 1, so iterating the map yields records in insertion order.
///
/// * **Insert**: runs [`Record::on_insert`], then stores the record under the next row id.
/// * **List**: returns clones of all records in insertion order.
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: BTreeMap<RowId, T>,
    next_id: u32,
}

impl<T: Record> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "OrderRecord" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Insert { record, respond_to } => {
                    debug!(entity_type, ?record, "Insert");
                    if let Err(e) = record.on_insert().await {
                        warn!(entity_type, error = %e, "on_insert failed");
                        let _ = respond_to.send(Err(FrameworkError::Rejected(Box::new(e))));
                        continue;
                    }
                    let id = RowId::from(self.next_id);
                    self.next_id += 1;
                    self.store.insert(id, record);
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                RecordRequest::List { respond_to } => {
                    let records: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
