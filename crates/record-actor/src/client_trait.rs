//! # ServiceClient Trait
//!
//! Common interface for domain clients that wrap a [`RecordClient`], providing default
//! `list_records` and `insert_record` methods with the error mapped into the client's own
//! error type.
use crate::{FrameworkError, Record, RecordClient, RowId};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard operations.
///
/// # Example
///
/// ```rust
/// use record_actor::{FrameworkError, Record, RecordClient, ServiceClient};
///
/// #[derive(Clone, Debug)]
/// struct Line;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("line error")]
/// struct LineError;
///
/// impl Record for Line {
///     type Error = LineError;
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("service unavailable: {0}")]
/// struct Unavailable(String);
///
/// struct LineClient {
///     inner: RecordClient<Line>,
/// }
///
/// impl ServiceClient<Line> for LineClient {
///     type Error = Unavailable;
///
///     fn inner(&self) -> &RecordClient<Line> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         Unavailable(e.to_string())
///     }
/// }
///
/// async fn usage(client: LineClient) {
///     // list_records() and insert_record() are provided automatically
///     let _ = client.list_records().await;
///     let _ = client.insert_record(Line).await;
/// }
/// ```
#[async_trait]
pub trait ServiceClient<T: Record>: Send + Sync {
    /// The service-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map framework errors to the service error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every record held by the service.
    #[tracing::instrument(skip(self))]
    async fn list_records(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Add one record to the service.
    #[tracing::instrument(skip(self))]
    async fn insert_record(&self, record: T) -> Result<RowId, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().insert(record).await.map_err(Self::map_error)
    }
}
