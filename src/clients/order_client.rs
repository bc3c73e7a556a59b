//! # Order Client
//!
//! Provides the order service API on top of a `RecordClient<OrderRecord>`.
use crate::model::Order;
use crate::schema::OrderRecord;
use crate::service::{OrderSource, ServiceError};
use async_trait::async_trait;
use record_actor::{FrameworkError, RecordClient, RowId, ServiceClient};
use tracing::{debug, instrument};

/// Client for the order service.
#[derive(Clone)]
pub struct OrderClient {
    inner: RecordClient<OrderRecord>,
}

impl OrderClient {
    pub fn new(inner: RecordClient<OrderRecord>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_order(&self, record: OrderRecord) -> Result<RowId, ServiceError> {
        self.insert_record(record).await
    }
}

impl ServiceClient<OrderRecord> for OrderClient {
    type Error = ServiceError;

    fn inner(&self) -> &RecordClient<OrderRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ServiceError::from(e)
    }
}

#[async_trait]
impl OrderSource for OrderClient {
    #[instrument(skip(self))]
    async fn fetch_orders(&self) -> Result<Vec<Order>, ServiceError> {
        let records = self.list_records().await?;
        debug!(count = records.len(), "Fetched orders");
        Ok(records.into_iter().map(Order::from).collect())
    }
}
