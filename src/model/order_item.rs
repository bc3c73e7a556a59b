use crate::model::OrderId;
use serde::Serialize;
use std::fmt::Display;

/// Identifier of a line item, unique within its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductOrderId(pub u32);

impl From<u32> for ProductOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product line of an order, as returned by the order item service.
///
/// `name` and `image_urls` are optional extras; the view falls back to
/// `article_number` and a placeholder image when they are missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_order_id: ProductOrderId,
    pub order_id: OrderId,
    pub article_number: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub image_urls: Vec<String>,
}

impl OrderItem {
    pub fn new(
        product_order_id: u32,
        order_id: u32,
        article_number: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_order_id: ProductOrderId(product_order_id),
            order_id: OrderId(order_id),
            article_number: article_number.into(),
            quantity,
            size: None,
            name: None,
            image_urls: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_urls.push(url.into());
        self
    }
}
