//! # Mock Client & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`RecordClient<T>`], but the requests it sends are
//! answered from a queue of expectations instead of a store. Use it to test code that
//! *consumes* a record service (such as a loader that joins two services) without
//! spawning actors, and to inject failures that a real actor would never produce.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted responses | Real ordered store |
//! | **Error Injection** | Easy (`return_err`) | Only validation rejections |
//! | **Use Case** | Testing consumers of a service | Testing the service itself |
//!
//! ## Simulating a failed fetch
//!
//! ```rust
//! use record_actor::mock::MockClient;
//! use record_actor::{FrameworkError, Record};
//!
//! #[derive(Clone, Debug)]
//! struct Line(u32);
//! #[derive(Debug, thiserror::Error)] #[error("line error")] struct LineError;
//! impl Record for Line { type Error = LineError; }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Line>::new();
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client and the raw request receiver, so a test can
//! hold a response back and decide when (and whether) to answer. That is how load
//! ordering and stale-result handling are tested.

use crate::client::RecordClient;
use crate::error::FrameworkError;
use crate::message::{RecordRequest, Response};
use crate::record::{Record, RowId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: Record> {
    Insert {
        response: Result<RowId, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation panics the mock task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: Record> {
    client: RecordClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        RecordRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` request.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every declared expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn push<T: Record>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectation queue poisoned")
        .push_back(expectation);
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> InsertExpectationBuilder<T> {
    pub fn return_ok(self, id: RowId) {
        push(&self.expectations, Expectation::Insert { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Insert { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> ListExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(records) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::List { response: Err(error) });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Waits for the next request and returns its responder if it is a `List`.
pub async fn expect_list<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(RecordRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns its payload and responder if it is an `Insert`.
pub async fn expect_insert<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T, Response<RowId>)> {
    match receiver.recv().await {
        Some(RecordRequest::Insert { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Line {
        sku: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("line error")]
    struct LineError;

    impl Record for Line {
        type Error = LineError;
    }

    fn line(sku: &str) -> Line {
        Line {
            sku: sku.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Line>(10);

        let insert_task = tokio::spawn(async move { client.insert(line("A-1")).await });

        let (record, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert_eq!(record.sku, "A-1");
        responder.send(Ok(RowId(7))).unwrap();

        let result = insert_task.await.unwrap();
        assert_eq!(result.unwrap(), RowId(7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Line>::new();
        mock.expect_insert().return_ok(RowId(1));
        mock.expect_list().return_ok(vec![line("A-1"), line("B-2")]);

        let client = mock.client();
        assert_eq!(client.insert(line("A-1")).await.unwrap(), RowId(1));

        let lines = client.list().await.unwrap();
        assert_eq!(lines, vec![line("A-1"), line("B-2")]);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Line>::new();
        mock.expect_insert().return_ok(RowId(1));

        let client = mock.client();
        let result = client.list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Line>::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
