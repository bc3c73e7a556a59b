//! # Presentation State
//!
//! [`OrderHistoryView`] holds the state a render layer draws from:
//!
//! ```text
//! Loading ──load ok──▶ Ready(orders)
//!    │                   (orders may be empty)
//!    └────load err─────▶ Ready([])   + error logged
//! ```
//!
//! Each load cycle is identified by a [`LoadTicket`]. Starting a new cycle supersedes all
//! earlier tickets, and tearing the view down supersedes every ticket. A result that
//! arrives with a superseded ticket is discarded, so a slow, stale fetch can never
//! overwrite the result of a newer one.
//!
//! State changes are published on a `tokio::sync::watch` channel; [`OrderHistoryView::subscribe`]
//! is the hook a render layer uses to re-render on data change.

use crate::loader::{LoadError, OrderHistoryLoader};
use crate::model::AggregatedOrder;
use crate::service::{OrderItemSource, OrderSource};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, Instrument};

/// What the view currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    /// Terminal for one load cycle. An empty list means "no orders", whether or not the
    /// fetch succeeded.
    Ready(Vec<AggregatedOrder>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn orders(&self) -> Option<&[AggregatedOrder]> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(orders) => Some(orders),
        }
    }
}

/// Identifies one load cycle of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// The order-history view model.
///
/// Shared between the caller and its load tasks through an `Arc`.
#[derive(Debug)]
pub struct OrderHistoryView {
    state: watch::Sender<ViewState>,
    generation: AtomicU64,
    torn_down: AtomicBool,
}

impl Default for OrderHistoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderHistoryView {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            state,
            generation: AtomicU64::new(0),
            torn_down: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Starts a new load cycle and returns its ticket. The state goes back to `Loading`.
    pub fn begin_load(&self) -> LoadTicket {
        let mut ticket = LoadTicket(0);
        // Under the channel lock shared with `complete`
        self.state.send_modify(|state| {
            ticket = LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            *state = ViewState::Loading;
        });
        debug!(generation = ticket.0, "Load cycle started");
        ticket
    }

    /// Applies the outcome of the cycle identified by `ticket`.
    ///
    /// Returns `false` if the ticket has been superseded or the view was torn down, in
    /// which case the state is left as it is. A failed load becomes `Ready([])`.
    pub fn complete(
        &self,
        ticket: LoadTicket,
        result: Result<Vec<AggregatedOrder>, LoadError>,
    ) -> bool {
        self.state.send_if_modified(|state| {
            // Checked under the channel lock so a concurrent begin_load cannot interleave
            let current = self.generation.load(Ordering::SeqCst);
            if self.torn_down.load(Ordering::SeqCst) || ticket.0 != current {
                debug!(
                    generation = ticket.0,
                    current,
                    failed = result.is_err(),
                    "Discarding stale load result"
                );
                return false;
            }

            *state = match result {
                Ok(orders) => {
                    info!(generation = ticket.0, orders = orders.len(), "View ready");
                    ViewState::Ready(orders)
                }
                Err(e) => {
                    error!(generation = ticket.0, error = %e, "Failed to load order history");
                    ViewState::Ready(Vec::new())
                }
            };
            true
        })
    }

    /// Runs one load cycle in a background task.
    ///
    /// The task resolves to `true` if its result was applied to the view.
    pub fn mount<O, I>(self: &Arc<Self>, loader: OrderHistoryLoader<O, I>) -> JoinHandle<bool>
    where
        O: OrderSource + 'static,
        I: OrderItemSource + 'static,
    {
        let ticket = self.begin_load();
        let view = Arc::clone(self);
        let span = info_span!("order_history_load", generation = ticket.0);
        tokio::spawn(
            async move {
                let result = loader.load_order_history().await;
                view.complete(ticket, result)
            }
            .instrument(span),
        )
    }

    /// Marks the view as unmounted. Results of in-flight loads are discarded from now on.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        debug!("View torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }
}
