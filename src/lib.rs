#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order History
//!
//! > **The customer's order history page as a view model.**
//!
//! A customer's orders and the lines that belong to them live in two separate services.
//! This crate fetches both, joins every line to its order on the client side, and exposes
//! the result as a small state machine a render layer can draw from.
//!
//! ## 🏗️ How a page load works
//!
//! 1. [`OrderHistoryView::mount`](view::OrderHistoryView::mount) starts a load cycle and
//!    puts the view into `Loading`.
//! 2. [`OrderHistoryLoader`](loader::OrderHistoryLoader) issues both fetches concurrently.
//! 3. [`aggregate`](loader::aggregate) groups the items by `orderId` and attaches each
//!    group to its order. Order sequence and item sequence are preserved; items that
//!    match no order are dropped.
//! 4. The view moves to `Ready(orders)`. A failed fetch is logged and becomes
//!    `Ready([])`, which renders the same as a customer with no orders.
//!
//! A result that arrives after the view was torn down, or after a newer cycle started,
//! is discarded.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`schema`])
//! - **Role**: Domain types the view works with, and the wire records services return.
//! - **Key items**: [`AggregatedOrder`](model::AggregatedOrder),
//!   [`OrderStatus`](model::OrderStatus), [`OrderItemRecord`](schema::OrderItemRecord).
//!
//! ### 2. The Services ([`service`], [`clients`])
//! - **Role**: The two collaborator contracts and their clients over in-process record
//!   services built on `record_actor`.
//! - **Key items**: [`OrderSource`](service::OrderSource),
//!   [`OrderItemClient`](clients::OrderItemClient).
//!
//! ### 3. The Join ([`loader`])
//! - **Role**: Concurrent fetch and pure aggregation.
//! - **Key items**: [`OrderHistoryLoader`](loader::OrderHistoryLoader),
//!   [`LoadError`](loader::LoadError).
//!
//! ### 4. The Presentation ([`view`])
//! - **Role**: Load state machine, status labels and styles, item display fallbacks and
//!   a plain-text page renderer.
//! - **Key items**: [`OrderHistoryView`](view::OrderHistoryView),
//!   [`render_page`](view::render_page).
//!
//! ### 5. The Orchestrator ([`runtime`], [`config`])
//! - **Role**: Spins up both record services, seeds them, and shuts them down.
//! - **Key items**: [`HistorySystem`](runtime::HistorySystem),
//!   [`HistoryConfig`](config::HistoryConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Render the built-in sample history
//! RUST_LOG=info cargo run
//!
//! # Render your own data as JSON
//! ORDER_HISTORY_ORDERS=orders.json ORDER_HISTORY_ITEMS=items.json \
//!     ORDER_HISTORY_OUTPUT=json cargo run
//! ```

pub mod clients;
pub mod config;
pub mod loader;
pub mod model;
pub mod runtime;
pub mod schema;
pub mod service;
pub mod view;
