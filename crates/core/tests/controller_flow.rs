//! Integration tests for the calendar controller state machine: loading,
//! navigation, failure handling, the last-navigation-wins race, and the
//! day-selection guard.

mod support;

use std::sync::{Arc, Mutex};

use slotbook_core::{CalendarController, CalendarState};
use slotbook_domain::{BlockedRuleSet, CalendarDate, SlotbookError, Username};
use support::clock::FixedClock;
use support::provider::MockBlockedDatesProvider;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn controller(
    provider: Arc<MockBlockedDatesProvider>,
    now: CalendarDate,
    shown: CalendarDate,
) -> CalendarController {
    CalendarController::new(
        Username::new("ana-host").unwrap(),
        provider,
        Arc::new(FixedClock::at_start_of(now)),
        shown,
    )
}

#[tokio::test]
async fn starts_idle_without_a_grid() {
    let provider = Arc::new(MockBlockedDatesProvider::new());
    let controller = controller(provider, date(2023, 11, 1), date(2023, 11, 15));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, CalendarState::Idle);
    assert_eq!(snapshot.reference_month, date(2023, 11, 1));
    assert!(snapshot.grid.is_none());
}

#[tokio::test]
async fn load_builds_the_grid_and_notifies_subscribers() {
    let provider = Arc::new(MockBlockedDatesProvider::new().with_empty_month(2023, 11));
    let controller = controller(provider, date(2023, 11, 1), date(2023, 11, 15));
    let mut rx = controller.subscribe();

    controller.load().await;

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.state, CalendarState::Ready);
    let grid = snapshot.grid.expect("grid after successful load");
    assert_eq!(grid.reference_month, date(2023, 11, 1));
    assert_eq!(grid.current_month_day_count(), 30);
}

#[tokio::test]
async fn navigation_refetches_rules_for_every_displayed_month() {
    let provider = Arc::new(
        MockBlockedDatesProvider::new()
            .with_empty_month(2023, 11)
            .with_empty_month(2023, 12)
            .with_empty_month(2024, 1),
    );
    let controller = controller(provider.clone(), date(2023, 11, 1), date(2023, 11, 15));

    controller.load().await;
    controller.navigate_next().await;
    controller.navigate_next().await;
    controller.navigate_previous().await;

    assert_eq!(provider.calls(), vec![(2023, 11), (2023, 12), (2024, 1), (2023, 12)]);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.reference_month, date(2023, 12, 1));
    assert_eq!(snapshot.state, CalendarState::Ready);
}

#[tokio::test]
async fn fetch_failure_keeps_the_previous_grid_visible() {
    let provider = Arc::new(
        MockBlockedDatesProvider::new()
            .with_empty_month(2023, 11)
            .with_failure(2023, 12, SlotbookError::Network("connection refused".into())),
    );
    let controller = controller(provider, date(2023, 11, 1), date(2023, 11, 15));

    controller.load().await;
    controller.navigate_next().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.reference_month, date(2023, 12, 1));
    assert!(matches!(snapshot.state, CalendarState::Failed { .. }));
    // Stale-but-available: November's grid is still what the view renders.
    assert_eq!(snapshot.grid.expect("stale grid").reference_month, date(2023, 11, 1));
}

#[tokio::test]
async fn retry_refetches_only_from_the_failed_state() {
    let provider = Arc::new(
        MockBlockedDatesProvider::new()
            .with_failure(2023, 11, SlotbookError::Network("timeout".into())),
    );
    let controller = controller(provider.clone(), date(2023, 11, 1), date(2023, 11, 15));

    controller.load().await;
    assert!(matches!(controller.snapshot().state, CalendarState::Failed { .. }));

    provider.set_response(2023, 11, BlockedRuleSet::empty(2023, 11));
    controller.retry().await;
    assert_eq!(controller.snapshot().state, CalendarState::Ready);
    assert_eq!(provider.calls().len(), 2);

    // Retrying from Ready is a no-op.
    controller.retry().await;
    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn late_response_for_a_superseded_month_is_discarded() {
    let provider = Arc::new(
        MockBlockedDatesProvider::new()
            .with_empty_month(2023, 12)
            .with_empty_month(2024, 1),
    );
    let gate = provider.gate(2023, 12);
    let controller = Arc::new(controller(provider.clone(), date(2023, 11, 1), date(2023, 11, 15)));

    // November -> December; December's fetch stalls on the gate.
    let pending = tokio::spawn({
        let controller = controller.clone();
        async move { controller.navigate_next().await }
    });
    while !provider.calls().contains(&(2023, 12)) {
        tokio::task::yield_now().await;
    }

    // December -> January while December's fetch is still outstanding.
    controller.navigate_next().await;
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, CalendarState::Ready);
    assert_eq!(snapshot.reference_month, date(2024, 1, 1));

    // Let December's stale response arrive; it must be ignored.
    gate.notify_one();
    pending.await.unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.reference_month, date(2024, 1, 1));
    assert_eq!(snapshot.state, CalendarState::Ready);
    assert_eq!(snapshot.grid.expect("grid").reference_month, date(2024, 1, 1));
}

#[tokio::test]
async fn selection_fires_only_for_bookable_current_month_cells() {
    let provider = Arc::new(
        MockBlockedDatesProvider::new()
            .with_rules(BlockedRuleSet::new(2024, 12, [0, 6], [25]).unwrap()),
    );
    let selected: Arc<Mutex<Vec<CalendarDate>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = selected.clone();
    let controller = controller(provider, date(2024, 12, 10), date(2024, 12, 1))
        .with_on_date_selected(move |picked| sink.lock().unwrap().push(picked));

    controller.load().await;

    assert!(!controller.select_date(date(2024, 12, 5)), "past day");
    assert!(!controller.select_date(date(2024, 12, 25)), "individually blocked day");
    assert!(!controller.select_date(date(2024, 12, 14)), "blocked weekday (Saturday)");
    assert!(!controller.select_date(date(2025, 1, 2)), "trailing padding cell");
    assert!(!controller.select_date(date(2024, 6, 1)), "date outside the grid");
    assert!(controller.select_date(date(2024, 12, 17)), "free future weekday");

    assert_eq!(selected.lock().unwrap().as_slice(), &[date(2024, 12, 17)]);
}

#[tokio::test]
async fn selection_is_rejected_before_rules_are_loaded() {
    let provider = Arc::new(MockBlockedDatesProvider::new().with_empty_month(2023, 11));
    let selected: Arc<Mutex<Vec<CalendarDate>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = selected.clone();
    let controller = controller(provider, date(2023, 11, 1), date(2023, 11, 15))
        .with_on_date_selected(move |picked| sink.lock().unwrap().push(picked));

    assert!(!controller.select_date(date(2023, 11, 20)));
    assert!(selected.lock().unwrap().is_empty());

    controller.load().await;
    assert!(controller.select_date(date(2023, 11, 20)));
    assert_eq!(selected.lock().unwrap().len(), 1);
}
