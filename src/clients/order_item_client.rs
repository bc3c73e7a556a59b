//! # Order Item Client
//!
//! Provides the order item service API on top of a `RecordClient<OrderItemRecord>`.
//! Records are validated again on the way out, so a response that slipped past the
//! service's own checks still fails the fetch instead of reaching the view.
use crate::model::OrderItem;
use crate::schema::OrderItemRecord;
use crate::service::{OrderItemSource, ServiceError};
use async_trait::async_trait;
use record_actor::{FrameworkError, RecordClient, RowId, ServiceClient};
use tracing::{debug, instrument, warn};

/// Client for the order item service.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: RecordClient<OrderItemRecord>,
}

impl OrderItemClient {
    pub fn new(inner: RecordClient<OrderItemRecord>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_order_item(&self, record: OrderItemRecord) -> Result<RowId, ServiceError> {
        self.insert_record(record).await
    }
}

impl ServiceClient<OrderItemRecord> for OrderItemClient {
    type Error = ServiceError;

    fn inner(&self) -> &RecordClient<OrderItemRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ServiceError::from(e)
    }
}

#[async_trait]
impl OrderItemSource for OrderItemClient {
    #[instrument(skip(self))]
    async fn fetch_order_items(&self) -> Result<Vec<OrderItem>, ServiceError> {
        let records = self.list_records().await?;
        debug!(count = records.len(), "Fetched order items");
        records
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!(error = %e, "Order item response failed validation");
                ServiceError::Decode(e.to_string())
            })
    }
}
