//! Runtime orchestration: starting and stopping the record services the view loads
//! from, and the tracing setup shared with the binary.
//!
//! - [`HistorySystem`] - spawns the order and order item services and hands out clients
//! - [`setup_tracing`] - installs the global `tracing` subscriber

pub mod history_system;

pub use history_system::*;
pub use record_actor::tracing::setup_tracing;
