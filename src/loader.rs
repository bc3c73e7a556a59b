//! # Order History Loader
//!
//! Fetches orders and order items from their services and joins them into
//! [`AggregatedOrder`]s.
//!
//! [`aggregate`] is the pure join. [`OrderHistoryLoader::load_order_history`] wraps it
//! with the two fetches, issued concurrently; the join runs only once both have
//! succeeded. If either fetch fails nothing is joined and a single
//! [`LoadError::FetchFailure`] names the service that failed.

use crate::model::{AggregatedOrder, Order, OrderId, OrderItem};
use crate::service::{OrderItemSource, OrderSource, ServiceError};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The service a failed fetch was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Orders,
    OrderItems,
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Orders => write!(f, "orders"),
            ServiceKind::OrderItems => write!(f, "order items"),
        }
    }
}

/// Errors that can occur while loading the order history.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// One of the two service calls failed.
    #[error("failed to fetch {service}: {source}")]
    FetchFailure {
        service: ServiceKind,
        #[source]
        source: ServiceError,
    },
}

/// Joins items to their orders.
///
/// The output has one entry per order, in the order of `orders`. Each entry carries the
/// items whose `order_id` equals the order's [grouping key](Order::grouping_key), in the
/// order they appear in `items`. Items that match no order are dropped.
pub fn aggregate(orders: Vec<Order>, items: Vec<OrderItem>) -> Vec<AggregatedOrder> {
    let mut by_order: HashMap<OrderId, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    let known: HashSet<OrderId> = orders.iter().map(Order::grouping_key).collect();
    let orphaned: usize = by_order
        .iter()
        .filter(|(key, _)| !known.contains(key))
        .map(|(_, group)| group.len())
        .sum();
    if orphaned > 0 {
        debug!(orphaned, "Dropping items that belong to no order");
    }

    orders
        .into_iter()
        .map(|order| {
            let order_items = by_order
                .get(&order.grouping_key())
                .cloned()
                .unwrap_or_default();
            AggregatedOrder::new(order, order_items)
        })
        .collect()
}

/// Loads the order history from an order service and an order item service.
#[derive(Clone)]
pub struct OrderHistoryLoader<O, I> {
    orders: O,
    items: I,
}

impl<O: OrderSource, I: OrderItemSource> OrderHistoryLoader<O, I> {
    pub fn new(orders: O, items: I) -> Self {
        Self { orders, items }
    }

    /// Fetches both collections concurrently and joins them.
    #[instrument(skip(self))]
    pub async fn load_order_history(&self) -> Result<Vec<AggregatedOrder>, LoadError> {
        let fetch_orders = async {
            self.orders
                .fetch_orders()
                .await
                .map_err(|source| LoadError::FetchFailure {
                    service: ServiceKind::Orders,
                    source,
                })
        };
        let fetch_items = async {
            self.items
                .fetch_order_items()
                .await
                .map_err(|source| LoadError::FetchFailure {
                    service: ServiceKind::OrderItems,
                    source,
                })
        };

        let (orders, items) = tokio::try_join!(fetch_orders, fetch_items)?;
        debug!(orders = orders.len(), items = items.len(), "Both fetches completed");

        let aggregated = aggregate(orders, items);
        info!(orders = aggregated.len(), "Order history loaded");
        Ok(aggregated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    fn order_without_id() -> Order {
        Order {
            order_id: None,
            status: OrderStatus::New,
            user_name: None,
        }
    }

    #[test]
    fn test_missing_order_id_collects_items_keyed_zero() {
        let orders = vec![order_without_id(), Order::new(1, OrderStatus::New)];
        let items = vec![
            OrderItem::new(10, 0, "ZERO", 1),
            OrderItem::new(11, 1, "ONE", 1),
        ];

        let result = aggregate(orders, items);

        assert_eq!(result[0].order_id(), None);
        assert_eq!(result[0].order_items.len(), 1);
        assert_eq!(result[0].order_items[0].article_number, "ZERO");
        assert_eq!(result[1].order_items[0].article_number, "ONE");
    }

    #[test]
    fn test_orders_sharing_a_key_each_receive_the_group() {
        let orders = vec![order_without_id(), order_without_id()];
        let items = vec![OrderItem::new(10, 0, "ZERO", 1)];

        let result = aggregate(orders, items);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|o| o.order_items.len() == 1));
    }

    #[test]
    fn test_load_error_names_the_failed_service() {
        let err = LoadError::FetchFailure {
            service: ServiceKind::OrderItems,
            source: ServiceError::Transport("Actor closed".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch order items: transport error: Actor closed"
        );
    }
}
