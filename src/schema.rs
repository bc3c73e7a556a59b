//! # Wire Schema
//!
//! Response records exchanged with the order service and the order item service, and
//! their validation into the domain [`model`](crate::model) types.
//!
//! Schema version 1. Field names are camelCase and unknown fields are ignored.
//! A document is either a bare JSON array of records or an envelope that names its
//! version:
//!
//! ```json
//! { "schemaVersion": 1, "records": [ { "orderId": 7, "orderStatusId": 2 } ] }
//! ```
//!
//! Required vs. optional fields:
//!
//! - [`OrderRecord`]: everything is optional. A missing `orderId` puts the order in the
//!   [`OrderId::FALLBACK`] group; a missing or unknown `orderStatusId` means `New`.
//! - [`OrderItemRecord`]: `productOrderId`, `orderId`, `articleNumber` and `quantity` are
//!   required; `size`, `name` and `imageUrls` are optional.

use crate::model::{Order, OrderId, OrderItem, OrderStatus, ProductOrderId};
use async_trait::async_trait;
use record_actor::Record;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

/// Errors raised while decoding or validating wire records.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (expected {expected})", expected = SCHEMA_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("item {product_order_id}: quantity {quantity} is out of range")]
    InvalidQuantity { product_order_id: u32, quantity: i64 },

    #[error("item {product_order_id}: article number is empty")]
    EmptyArticleNumber { product_order_id: u32 },
}

/// An order as the order service returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(default)]
    pub order_id: Option<u32>,
    #[serde(default)]
    pub order_status_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// An order line as the order item service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub product_order_id: u32,
    pub order_id: u32,
    pub article_number: String,
    pub quantity: i64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
}

impl OrderItemRecord {
    pub fn new(
        product_order_id: u32,
        order_id: u32,
        article_number: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            product_order_id,
            order_id,
            article_number: article_number.into(),
            quantity,
            size: None,
            name: None,
            image_urls: None,
        }
    }

    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.checked_quantity()?;
        if self.article_number.trim().is_empty() {
            return Err(SchemaError::EmptyArticleNumber {
                product_order_id: self.product_order_id,
            });
        }
        Ok(())
    }

    fn checked_quantity(&self) -> Result<u32, SchemaError> {
        u32::try_from(self.quantity).map_err(|_| SchemaError::InvalidQuantity {
            product_order_id: self.product_order_id,
            quantity: self.quantity,
        })
    }
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            order_id: record.order_id.map(OrderId),
            status: OrderStatus::from_id(record.order_status_id),
            user_name: record.user_name.filter(|name| !name.is_empty()),
        }
    }
}

impl TryFrom<OrderItemRecord> for OrderItem {
    type Error = SchemaError;

    fn try_from(record: OrderItemRecord) -> Result<Self, Self::Error> {
        record.validate()?;
        let quantity = record.checked_quantity()?;
        Ok(OrderItem {
            product_order_id: ProductOrderId(record.product_order_id),
            order_id: OrderId(record.order_id),
            article_number: record.article_number,
            quantity,
            size: record.size,
            name: record.name,
            image_urls: record.image_urls.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl Record for OrderRecord {
    type Error = SchemaError;
}

#[async_trait]
impl Record for OrderItemRecord {
    type Error = SchemaError;

    async fn on_insert(&self) -> Result<(), Self::Error> {
        self.validate()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document<T> {
    Bare(Vec<T>),
    Versioned {
        #[serde(rename = "schemaVersion")]
        schema_version: u32,
        records: Vec<T>,
    },
}

fn decode_document<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, SchemaError> {
    match serde_json::from_str::<Document<T>>(json)? {
        Document::Bare(records) => Ok(records),
        Document::Versioned {
            schema_version,
            records,
        } if schema_version == SCHEMA_VERSION => Ok(records),
        Document::Versioned { schema_version, .. } => Err(SchemaError::UnsupportedVersion {
            found: schema_version,
        }),
    }
}

/// Decodes an order service response.
pub fn decode_orders(json: &str) -> Result<Vec<OrderRecord>, SchemaError> {
    decode_document(json)
}

/// Decodes an order item service response and validates every record.
pub fn decode_order_items(json: &str) -> Result<Vec<OrderItemRecord>, SchemaError> {
    let records: Vec<OrderItemRecord> = decode_document(json)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}
