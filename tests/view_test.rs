use order_history::clients::{OrderClient, OrderItemClient};
use order_history::loader::{LoadError, OrderHistoryLoader, ServiceKind};
use order_history::model::OrderId;
use order_history::schema::{OrderItemRecord, OrderRecord};
use order_history::service::ServiceError;
use order_history::view::{render_page, OrderHistoryView, ViewState};
use record_actor::mock::{create_mock_client, expect_list, MockClient};
use record_actor::FrameworkError;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::timeout;

fn order(id: u32) -> OrderRecord {
    OrderRecord {
        order_id: Some(id),
        ..Default::default()
    }
}

fn loader(
    orders: &MockClient<OrderRecord>,
    items: &MockClient<OrderItemRecord>,
) -> OrderHistoryLoader<OrderClient, OrderItemClient> {
    OrderHistoryLoader::new(
        OrderClient::new(orders.client()),
        OrderItemClient::new(items.client()),
    )
}

/// Collects formatted log output so tests can assert on it.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_mount_loads_and_joins() {
    let mut orders = MockClient::<OrderRecord>::new();
    orders.expect_list().return_ok(vec![order(1), order(2)]);
    let mut items = MockClient::<OrderItemRecord>::new();
    items.expect_list().return_ok(vec![
        OrderItemRecord::new(20, 2, "B", 1),
        OrderItemRecord::new(10, 1, "A", 2),
    ]);

    let view = Arc::new(OrderHistoryView::new());
    let applied = view.mount(loader(&orders, &items)).await.unwrap();

    assert!(applied);
    let state = view.state();
    let loaded = state.orders().expect("view should be ready");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].order_id(), Some(OrderId(1)));
    assert_eq!(loaded[0].order_items[0].article_number, "A");
    assert_eq!(loaded[1].order_items[0].article_number, "B");
    orders.verify();
    items.verify();
}

#[tokio::test]
async fn test_mount_enters_loading_first() {
    let (orders, _orders_rx) = create_mock_client::<OrderRecord>(4);
    let (items, _items_rx) = create_mock_client::<OrderItemRecord>(4);
    let view = Arc::new(OrderHistoryView::new());

    let _pending = view.mount(OrderHistoryLoader::new(
        OrderClient::new(orders),
        OrderItemClient::new(items),
    ));

    assert_eq!(view.state(), ViewState::Loading);
    assert_eq!(render_page(&view.state()), "Завантаження...\n");
}

fn failing_orders_loader() -> (
    MockClient<OrderRecord>,
    MockClient<OrderItemRecord>,
    OrderHistoryLoader<OrderClient, OrderItemClient>,
) {
    let mut orders = MockClient::<OrderRecord>::new();
    orders.expect_list().return_err(FrameworkError::ActorClosed);
    let mut items = MockClient::<OrderItemRecord>::new();
    items.expect_list().return_ok(vec![OrderItemRecord::new(10, 1, "A", 1)]);
    let loader = loader(&orders, &items);
    (orders, items, loader)
}

#[tokio::test]
async fn test_orders_failure_names_the_service() {
    let (_orders, _items, loader) = failing_orders_loader();

    let result = loader.load_order_history().await;

    assert_eq!(
        result,
        Err(LoadError::FetchFailure {
            service: ServiceKind::Orders,
            source: ServiceError::Transport("Actor closed".to_string()),
        })
    );
}

#[tokio::test]
async fn test_orders_failure_yields_empty_ready() {
    let (_orders, _items, loader) = failing_orders_loader();
    let view = Arc::new(OrderHistoryView::new());

    assert!(view.mount(loader).await.unwrap());
    assert_eq!(view.state(), ViewState::Ready(Vec::new()));
}

#[tokio::test]
async fn test_invalid_item_fails_the_load() {
    let mut orders = MockClient::<OrderRecord>::new();
    orders.expect_list().return_ok(vec![order(1)]);
    let mut items = MockClient::<OrderItemRecord>::new();
    items
        .expect_list()
        .return_ok(vec![OrderItemRecord::new(10, 1, "A", -1)]);

    let view = Arc::new(OrderHistoryView::new());
    view.mount(loader(&orders, &items)).await.unwrap();

    assert_eq!(view.state(), ViewState::Ready(Vec::new()));
    assert_eq!(
        render_page(&view.state()),
        "Історія замовлень\n\nУ вас ще немає замовлень.\n"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_load_failure_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut orders = MockClient::<OrderRecord>::new();
    orders.expect_list().return_ok(Vec::new());
    let mut items = MockClient::<OrderItemRecord>::new();
    items.expect_list().return_err(FrameworkError::ActorDropped);

    let view = OrderHistoryView::new();
    let ticket = view.begin_load();
    let result = loader(&orders, &items).load_order_history().await;
    assert!(view.complete(ticket, result));

    let output = logs.contents();
    assert!(output.contains("ERROR"), "no error line in: {output}");
    assert!(output.contains("Failed to load order history"));
    assert!(output.contains("failed to fetch order items"));
}

#[tokio::test]
async fn test_fetches_are_issued_concurrently() {
    let (orders, mut orders_rx) = create_mock_client::<OrderRecord>(4);
    let (items, mut items_rx) = create_mock_client::<OrderItemRecord>(4);
    let view = Arc::new(OrderHistoryView::new());

    let handle = view.mount(OrderHistoryLoader::new(
        OrderClient::new(orders),
        OrderItemClient::new(items),
    ));

    // Both requests must be in flight before either is answered
    let orders_reply = timeout(Duration::from_secs(1), expect_list(&mut orders_rx))
        .await
        .expect("orders request not sent")
        .expect("expected a List request");
    let items_reply = timeout(Duration::from_secs(1), expect_list(&mut items_rx))
        .await
        .expect("items request not sent while orders were pending")
        .expect("expected a List request");

    items_reply
        .send(Ok(vec![OrderItemRecord::new(10, 3, "A", 1)]))
        .unwrap();
    assert!(view.state().is_loading());
    orders_reply.send(Ok(vec![order(3)])).unwrap();

    assert!(handle.await.unwrap());
    assert_eq!(view.state().orders().unwrap()[0].order_items.len(), 1);
}

#[tokio::test]
async fn test_stale_load_does_not_overwrite_newer_one() {
    let (slow_orders, mut slow_orders_rx) = create_mock_client::<OrderRecord>(4);
    let (slow_items, mut slow_items_rx) = create_mock_client::<OrderItemRecord>(4);
    let view = Arc::new(OrderHistoryView::new());

    let slow = view.mount(OrderHistoryLoader::new(
        OrderClient::new(slow_orders),
        OrderItemClient::new(slow_items),
    ));
    let slow_orders_reply = expect_list(&mut slow_orders_rx).await.unwrap();
    let slow_items_reply = expect_list(&mut slow_items_rx).await.unwrap();

    let mut orders = MockClient::<OrderRecord>::new();
    orders.expect_list().return_ok(vec![order(2)]);
    let mut items = MockClient::<OrderItemRecord>::new();
    items.expect_list().return_ok(Vec::new());
    assert!(view.mount(loader(&orders, &items)).await.unwrap());

    slow_orders_reply.send(Ok(vec![order(1)])).unwrap();
    slow_items_reply.send(Ok(Vec::new())).unwrap();
    assert!(!slow.await.unwrap());

    let state = view.state();
    let loaded = state.orders().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].order_id(), Some(OrderId(2)));
}

#[tokio::test]
async fn test_teardown_discards_in_flight_load() {
    let (orders, mut orders_rx) = create_mock_client::<OrderRecord>(4);
    let (items, mut items_rx) = create_mock_client::<OrderItemRecord>(4);
    let view = Arc::new(OrderHistoryView::new());
    let mut updates = view.subscribe();

    let handle = view.mount(OrderHistoryLoader::new(
        OrderClient::new(orders),
        OrderItemClient::new(items),
    ));
    let orders_reply = expect_list(&mut orders_rx).await.unwrap();
    let items_reply = expect_list(&mut items_rx).await.unwrap();
    updates.borrow_and_update();

    view.teardown();
    orders_reply.send(Ok(vec![order(1)])).unwrap();
    items_reply.send(Ok(Vec::new())).unwrap();

    assert!(!handle.await.unwrap());
    assert_eq!(view.state(), ViewState::Loading);
    assert!(!updates.has_changed().unwrap());
}
