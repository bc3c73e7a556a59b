//! Derived display values.
//!
//! Every helper here is total: unknown status ids resolve to the `New` status, a missing
//! or empty name falls back to the article number and a missing image falls back to
//! [`PLACEHOLDER_IMAGE`].

use crate::model::{AggregatedOrder, OrderItem, OrderStatus};
use serde::Serialize;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50";

pub fn status_label(status_id: Option<i64>) -> &'static str {
    OrderStatus::from_id(status_id).label()
}

pub fn status_style(status_id: Option<i64>) -> &'static str {
    OrderStatus::from_id(status_id).style()
}

pub fn display_name(item: &OrderItem) -> &str {
    match item.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => item.article_number.as_str(),
    }
}

pub fn preview_image(item: &OrderItem) -> &str {
    item.image_urls
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Render-ready projection of one [`AggregatedOrder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    /// Empty when the order arrived without an id.
    pub title_id: String,
    pub status_label: &'static str,
    pub status_style: &'static str,
    pub customer: Option<String>,
    pub lines: Vec<ItemLine>,
}

/// Render-ready projection of one order item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLine {
    pub key: u32,
    pub name: String,
    pub image: String,
    pub size: Option<String>,
    pub quantity: u32,
}

impl From<&OrderItem> for ItemLine {
    fn from(item: &OrderItem) -> Self {
        ItemLine {
            key: item.product_order_id.0,
            name: display_name(item).to_string(),
            image: preview_image(item).to_string(),
            size: item.size.clone(),
            quantity: item.quantity,
        }
    }
}

impl From<&AggregatedOrder> for OrderCard {
    fn from(order: &AggregatedOrder) -> Self {
        let status = order.order.status;
        OrderCard {
            title_id: order
                .order_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            status_label: status.label(),
            status_style: status.style(),
            customer: order.order.user_name.clone(),
            lines: order.order_items.iter().map(ItemLine::from).collect(),
        }
    }
}

pub fn order_cards(orders: &[AggregatedOrder]) -> Vec<OrderCard> {
    orders.iter().map(OrderCard::from).collect()
}
