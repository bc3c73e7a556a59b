use crate::clients::{OrderClient, OrderItemClient};
use crate::config::HistoryConfig;
use crate::loader::OrderHistoryLoader;
use crate::schema::{OrderItemRecord, OrderRecord};
use crate::service::ServiceError;
use record_actor::RecordActor;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("service task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Runs the order service and the order item service for the lifetime of the process.
///
/// ```ignore
/// let system = HistorySystem::new(&HistoryConfig::default());
/// system.seed_orders(orders).await?;
/// system.seed_order_items(items).await?;
///
/// let view = Arc::new(OrderHistoryView::new());
/// view.mount(system.loader()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct HistorySystem {
    /// Client for the order service
    pub order_client: OrderClient,

    /// Client for the order item service
    pub order_item_client: OrderItemClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl HistorySystem {
    /// Spawns both services. Must be called from within a Tokio runtime.
    pub fn new(config: &HistoryConfig) -> Self {
        let (order_actor, orders) = RecordActor::<OrderRecord>::new(config.buffer_size);
        let (item_actor, items) = RecordActor::<OrderItemRecord>::new(config.buffer_size);

        let order_handle = tokio::spawn(order_actor.run());
        let item_handle = tokio::spawn(item_actor.run());
        info!(buffer_size = config.buffer_size, "Order services started");

        Self {
            order_client: OrderClient::new(orders),
            order_item_client: OrderItemClient::new(items),
            handles: vec![order_handle, item_handle],
        }
    }

    /// A loader wired to both services.
    pub fn loader(&self) -> OrderHistoryLoader<OrderClient, OrderItemClient> {
        OrderHistoryLoader::new(self.order_client.clone(), self.order_item_client.clone())
    }

    /// Inserts orders in the given order. Stops at the first rejected record.
    pub async fn seed_orders(&self, records: Vec<OrderRecord>) -> Result<usize, ServiceError> {
        let count = records.len();
        for record in records {
            self.order_client.add_order(record).await?;
        }
        info!(count, "Seeded orders");
        Ok(count)
    }

    /// Inserts order items in the given order. Stops at the first rejected record.
    pub async fn seed_order_items(
        &self,
        records: Vec<OrderItemRecord>,
    ) -> Result<usize, ServiceError> {
        let count = records.len();
        for record in records {
            self.order_item_client.add_order_item(record).await?;
        }
        info!(count, "Seeded order items");
        Ok(count)
    }

    /// Drops the clients held here and waits for both services to stop.
    ///
    /// Services stop once every clone of their client is gone, so loaders handed out by
    /// [`HistorySystem::loader`] must be dropped first.
    pub async fn shutdown(self) -> Result<(), RuntimeError> {
        info!("Shutting down order services...");
        drop(self.order_client);
        drop(self.order_item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Service task failed");
                return Err(RuntimeError::TaskFailed(e));
            }
        }

        info!("Order services stopped");
        Ok(())
    }
}
