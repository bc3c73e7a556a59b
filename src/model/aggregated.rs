use crate::model::{Order, OrderId, OrderItem};
use serde::Serialize;

/// An order joined with its line items. Derived on every load, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub order_items: Vec<OrderItem>,
}

impl AggregatedOrder {
    pub fn new(order: Order, order_items: Vec<OrderItem>) -> Self {
        Self { order, order_items }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order.order_id
    }

    pub fn has_items(&self) -> bool {
        !self.order_items.is_empty()
    }
}
