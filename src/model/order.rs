use serde::Serialize;
use std::fmt::Display;

/// Identifier of an order as issued by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    /// Grouping key used for orders that arrive without an id.
    pub const FALLBACK: OrderId = OrderId(0);
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle stage of an order.
///
/// The wire carries a bare integer (`orderStatusId`). Every integer maps to exactly one
/// variant: ids 1 through 8 map to their stage, anything else (including an absent id)
/// maps to [`OrderStatus::default`], which is `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum OrderStatus {
    #[default]
    New,
    Processing,
    AwaitingPayment,
    Shipped,
    Delivered,
    Returned,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::AwaitingPayment,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Returned,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Resolves a wire status id. Total: unknown or absent ids fall back to `New`.
    pub fn from_id(id: Option<i64>) -> Self {
        match id {
            Some(1) => OrderStatus::New,
            Some(2) => OrderStatus::Processing,
            Some(3) => OrderStatus::AwaitingPayment,
            Some(4) => OrderStatus::Shipped,
            Some(5) => OrderStatus::Delivered,
            Some(6) => OrderStatus::Returned,
            Some(7) => OrderStatus::Completed,
            Some(8) => OrderStatus::Cancelled,
            _ => OrderStatus::default(),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            OrderStatus::New => 1,
            OrderStatus::Processing => 2,
            OrderStatus::AwaitingPayment => 3,
            OrderStatus::Shipped => 4,
            OrderStatus::Delivered => 5,
            OrderStatus::Returned => 6,
            OrderStatus::Completed => 7,
            OrderStatus::Cancelled => 8,
        }
    }

    /// Customer-facing label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::New => "Нове замовлення",
            OrderStatus::Processing => "В обробці",
            OrderStatus::AwaitingPayment => "Очікує оплати",
            OrderStatus::Shipped => "Відправлене",
            OrderStatus::Delivered => "Доставлене",
            OrderStatus::Returned => "Повернене",
            OrderStatus::Completed => "Виконане",
            OrderStatus::Cancelled => "Відмінене",
        }
    }

    /// Style token (utility classes) for the status badge.
    pub fn style(self) -> &'static str {
        match self {
            OrderStatus::New => "bg-blue-100 text-blue-800",
            OrderStatus::Processing => "bg-yellow-100 text-yellow-800",
            OrderStatus::AwaitingPayment => "bg-orange-100 text-orange-800",
            OrderStatus::Shipped => "bg-purple-100 text-purple-800",
            OrderStatus::Delivered => "bg-green-100 text-green-800",
            OrderStatus::Returned => "bg-red-100 text-red-800",
            OrderStatus::Completed => "bg-gray-100 text-gray-800",
            OrderStatus::Cancelled => "bg-black text-white",
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        status.id()
    }
}

/// A customer order as returned by the order service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Option<OrderId>,
    #[serde(rename = "orderStatusId")]
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Order {
    pub fn new(order_id: u32, status: OrderStatus) -> Self {
        Self {
            order_id: Some(OrderId(order_id)),
            status,
            user_name: None,
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Key this order is joined on. Orders without an id share [`OrderId::FALLBACK`].
    pub fn grouping_key(&self) -> OrderId {
        self.order_id.unwrap_or(OrderId::FALLBACK)
    }
}
