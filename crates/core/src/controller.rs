//! Calendar controller state machine
//!
//! Owns the month cursor and the current grid, triggers a fresh rule fetch
//! whenever the displayed month changes, and publishes immutable snapshots
//! through a watch channel so the presentation layer can re-read on
//! notification instead of relying on implicit reactivity.
//!
//! Every fetch is tagged with a generation counter taken while holding the
//! state lock. A response whose generation no longer matches the current one
//! was superseded by a later navigation and is discarded on arrival; the
//! transport is not aborted. This is the "last navigation wins" guarantee:
//! the view never renders month A's grid after month B has been requested.

use std::sync::{Arc, Mutex, PoisonError};

use slotbook_domain::{BlockedRuleSet, CalendarDate, CalendarMonthGrid, Result, Username};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::availability;
use crate::cursor::DateCursor;
use crate::grid;
use crate::ports::{BlockedDatesProvider, Clock};

/// Navigation state of the calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarState {
    /// No fetch has been started yet.
    Idle,
    /// A fetch for the displayed month is in flight.
    Loading,
    /// The grid reflects the displayed month's rules.
    Ready,
    /// The last fetch failed; the previous grid, if any, stays visible.
    Failed { error: String },
}

/// Immutable view of the controller published on every transition.
#[derive(Debug, Clone)]
pub struct CalendarSnapshot {
    /// First day of the displayed month.
    pub reference_month: CalendarDate,
    pub state: CalendarState,
    /// Most recently built grid. On `Loading` or `Failed` this is the stale
    /// grid from the last `Ready` state, kept for display.
    pub grid: Option<Arc<CalendarMonthGrid>>,
}

type SelectionCallback = Box<dyn Fn(CalendarDate) + Send + Sync>;

struct ControllerState {
    cursor: DateCursor,
    generation: u64,
    state: CalendarState,
    grid: Option<Arc<CalendarMonthGrid>>,
}

/// Month tag carried by an in-flight fetch.
struct FetchRequest {
    generation: u64,
    reference_month: CalendarDate,
}

/// Orchestrates cursor, rule fetches, resolver and grid builder.
///
/// State transitions are serialized behind a mutex (single writer); the
/// resolver and grid builder stay pure and are called outside any await
/// point. The controller lives for the lifetime of the calendar view.
pub struct CalendarController {
    username: Username,
    provider: Arc<dyn BlockedDatesProvider>,
    clock: Arc<dyn Clock>,
    inner: Mutex<ControllerState>,
    snapshot_tx: watch::Sender<CalendarSnapshot>,
    on_date_selected: Option<SelectionCallback>,
}

impl CalendarController {
    /// Create a controller displaying the month containing `initial_date`,
    /// in the `Idle` state. Call [`load`](Self::load) to fetch rules.
    pub fn new(
        username: Username,
        provider: Arc<dyn BlockedDatesProvider>,
        clock: Arc<dyn Clock>,
        initial_date: CalendarDate,
    ) -> Self {
        let cursor = DateCursor::new(initial_date);
        let (snapshot_tx, _) = watch::channel(CalendarSnapshot {
            reference_month: cursor.reference_month(),
            state: CalendarState::Idle,
            grid: None,
        });
        Self {
            username,
            provider,
            clock,
            inner: Mutex::new(ControllerState {
                cursor,
                generation: 0,
                state: CalendarState::Idle,
                grid: None,
            }),
            snapshot_tx,
            on_date_selected: None,
        }
    }

    /// Register the day-selection callback. It only ever fires for
    /// current-month cells with `disabled = false`.
    pub fn with_on_date_selected(
        mut self,
        callback: impl Fn(CalendarDate) + Send + Sync + 'static,
    ) -> Self {
        self.on_date_selected = Some(Box::new(callback));
        self
    }

    /// Subscribe to snapshot notifications.
    pub fn subscribe(&self) -> watch::Receiver<CalendarSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> CalendarSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Fetch rules for the currently displayed month.
    pub async fn load(&self) {
        let request = self.begin(|cursor| *cursor);
        self.run_fetch(request).await;
    }

    /// Move to the previous month and fetch its rules.
    pub async fn navigate_previous(&self) {
        let request = self.begin(DateCursor::previous_month);
        self.run_fetch(request).await;
    }

    /// Move to the next month and fetch its rules.
    pub async fn navigate_next(&self) {
        let request = self.begin(DateCursor::next_month);
        self.run_fetch(request).await;
    }

    /// Refetch the displayed month. Only meaningful after a failure; in any
    /// other state this is a no-op.
    pub async fn retry(&self) {
        let request = {
            let mut inner = self.lock();
            if !matches!(inner.state, CalendarState::Failed { .. }) {
                return;
            }
            inner.generation += 1;
            inner.state = CalendarState::Loading;
            let request = FetchRequest {
                generation: inner.generation,
                reference_month: inner.cursor.reference_month(),
            };
            self.publish(&inner);
            request
        };
        self.run_fetch(request).await;
    }

    /// Report a day selection from the presentation layer.
    ///
    /// Returns whether the selection was accepted. Padding cells, rule-
    /// blocked or past days, days outside the grid, and any state other than
    /// `Ready` are rejected and the callback is not invoked.
    pub fn select_date(&self, date: CalendarDate) -> bool {
        let accepted = {
            let inner = self.lock();
            inner.state == CalendarState::Ready
                && inner
                    .grid
                    .as_deref()
                    .and_then(|grid| grid.cell(date))
                    .is_some_and(|cell| cell.is_current_month && !cell.disabled)
        };
        if accepted {
            if let Some(callback) = &self.on_date_selected {
                callback(date);
            }
        }
        accepted
    }

    /// Transition to `Loading` for the month produced by `navigate`, bumping
    /// the generation so any in-flight fetch becomes stale.
    fn begin(&self, navigate: impl FnOnce(&DateCursor) -> DateCursor) -> FetchRequest {
        let mut inner = self.lock();
        let moved = navigate(&inner.cursor);
        inner.cursor = moved;
        inner.generation += 1;
        inner.state = CalendarState::Loading;
        let request = FetchRequest {
            generation: inner.generation,
            reference_month: inner.cursor.reference_month(),
        };
        self.publish(&inner);
        request
    }

    async fn run_fetch(&self, request: FetchRequest) {
        let month = request.reference_month;
        let outcome = self
            .provider
            .fetch_blocked_dates(&self.username, month.year(), month.month())
            .await;
        self.complete(&request, outcome);
    }

    fn complete(&self, request: &FetchRequest, outcome: Result<BlockedRuleSet>) {
        let mut inner = self.lock();
        if request.generation != inner.generation {
            debug!(
                month = %request.reference_month,
                stale_generation = request.generation,
                current_generation = inner.generation,
                "discarding superseded blocked-dates response"
            );
            return;
        }

        let built = outcome.and_then(|rules| {
            let cells =
                availability::classify(request.reference_month, Some(&rules), self.clock.now())?;
            Ok(grid::build_month_grid(request.reference_month, cells))
        });

        match built {
            Ok(grid) => {
                inner.grid = Some(Arc::new(grid));
                inner.state = CalendarState::Ready;
            }
            Err(err) => {
                warn!(month = %request.reference_month, error = %err, "blocked-dates fetch failed");
                // The previous grid stays in place for stale-but-available
                // display.
                inner.state = CalendarState::Failed { error: err.to_string() };
            }
        }
        self.publish(&inner);
    }

    fn publish(&self, inner: &ControllerState) {
        self.snapshot_tx.send_replace(CalendarSnapshot {
            reference_month: inner.cursor.reference_month(),
            state: inner.state.clone(),
            grid: inner.grid.clone(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ControllerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
