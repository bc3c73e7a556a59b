//! Type-safe wrappers around [`RecordClient`](record_actor::RecordClient) for the two
//! record services.

pub mod order_client;
pub mod order_item_client;

pub use order_client::*;
pub use order_item_client::*;
