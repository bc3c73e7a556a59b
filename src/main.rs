use order_history::config::{HistoryConfig, OutputFormat};
use order_history::runtime::{setup_tracing, HistorySystem};
use order_history::schema::{decode_order_items, decode_orders};
use order_history::view::{order_cards, render_page, OrderHistoryView};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const SAMPLE_ORDERS: &str = include_str!("../data/orders.json");
const SAMPLE_ORDER_ITEMS: &str = include_str!("../data/order_items.json");

async fn read_document(path: Option<&Path>, fallback: &'static str) -> std::io::Result<String> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Reading seed document");
            tokio::fs::read_to_string(path).await
        }
        None => Ok(fallback.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();
    let config = HistoryConfig::from_env()?;

    let orders_json = read_document(config.orders_path.as_deref(), SAMPLE_ORDERS).await?;
    let items_json = read_document(config.items_path.as_deref(), SAMPLE_ORDER_ITEMS).await?;
    let orders = decode_orders(&orders_json)?;
    let items = decode_order_items(&items_json)?;

    let system = HistorySystem::new(&config);
    system.seed_orders(orders).await?;
    system.seed_order_items(items).await?;

    let view = Arc::new(OrderHistoryView::new());
    if !view.mount(system.loader()).await? {
        warn!("Load result was discarded");
    }

    let state = view.state();
    match config.output {
        OutputFormat::Text => print!("{}", render_page(&state)),
        OutputFormat::Json => {
            let cards = order_cards(state.orders().unwrap_or_default());
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
    }

    view.teardown();
    system.shutdown().await?;
    Ok(())
}
