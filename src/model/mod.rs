//! Domain types of the order-history view: orders, their line items and the joined result.

pub mod aggregated;
pub mod order;
pub mod order_item;

pub use aggregated::*;
pub use order::*;
pub use order_item::*;
