use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::LocalSet;

use trapezio::core::{
    CustomNavigationRequest, Feature, LifecycleContainer, NavigationError, Navigator, ScopeKey,
    StackNavigator,
};
use trapezio::features::counter::{CounterEvent, CounterScreen, CounterStore};
use trapezio::features::summary::{SummaryEvent, SummaryScreen, SummaryStore};
use trapezio::usecases::{DivideUseCase, HalvingUseCase};

// ============================================================================
// Helper Functions
// ============================================================================

/// Halves immediately, so continuations finish after a few yields.
struct InstantHalving;

#[async_trait]
impl DivideUseCase for InstantHalving {
    async fn execute(&self, value: i64) -> i64 {
        value / 2
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn navigator_with_log() -> (Rc<StackNavigator>, Rc<RefCell<Vec<CustomNavigationRequest>>>) {
    let log = Rc::new(RefCell::new(Vec::<CustomNavigationRequest>::new()));
    let sink = log.clone();
    let navigator = StackNavigator::new(
        Some(Rc::new(CounterScreen { initial_value: 0 })),
        Some(Box::new(move |request: CustomNavigationRequest| {
            sink.borrow_mut().push(request)
        })),
    );
    (navigator, log)
}

fn counter(navigator: &Rc<StackNavigator>, initial_value: i64) -> Rc<CounterStore> {
    Rc::new(CounterStore::new(
        CounterScreen { initial_value },
        Arc::new(InstantHalving),
        navigator.handle(),
    ))
}

// ============================================================================
// Stack Navigator
// ============================================================================

#[test]
fn test_pushes_get_unique_ids_even_for_equal_screens() {
    let (navigator, _) = navigator_with_log();
    for _ in 0..5 {
        navigator.go_to(Rc::new(SummaryScreen { value: 1 }));
    }

    let ids: HashSet<_> = navigator.path().iter().map(|e| e.id()).collect();
    assert_eq!(navigator.depth(), 5);
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_dismiss_then_dismiss_to_root() {
    let (navigator, _) = navigator_with_log();
    navigator.go_to(Rc::new(SummaryScreen { value: 1 }));
    navigator.go_to(Rc::new(SummaryScreen { value: 2 }));
    navigator.go_to(Rc::new(SummaryScreen { value: 3 }));

    navigator.dismiss();
    let top = navigator.top().unwrap();
    assert_eq!(top.screen().downcast_ref::<SummaryScreen>().unwrap().value, 2);

    navigator.dismiss_to_root();
    assert!(navigator.path().is_empty());

    // Both are no-ops on an empty path
    navigator.dismiss();
    navigator.dismiss_to_root();
    assert_eq!(navigator.depth(), 0);
    assert!(navigator.root().unwrap().is::<CounterScreen>());
}

#[test]
fn test_dismiss_to_is_unsupported_and_leaves_path() {
    let (navigator, _) = navigator_with_log();
    navigator.go_to(Rc::new(SummaryScreen { value: 1 }));

    let result = navigator.dismiss_to(&CounterScreen { initial_value: 0 });
    assert_eq!(
        result,
        Err(NavigationError::Unsupported {
            operation: "dismiss_to"
        })
    );
    assert_eq!(navigator.depth(), 1);
}

#[test]
fn test_observers_see_each_change_only() {
    let (navigator, _) = navigator_with_log();
    let depths = Rc::new(RefCell::new(Vec::new()));
    let seen = depths.clone();
    navigator.subscribe(move |state| seen.borrow_mut().push(state.depth()));

    navigator.go_to(Rc::new(SummaryScreen { value: 1 }));
    navigator.go_to(Rc::new(SummaryScreen { value: 2 }));
    navigator.dismiss_to_root();
    navigator.dismiss_to_root();
    navigator.dismiss();

    assert_eq!(*depths.borrow(), vec![1, 2, 0]);
}

// ============================================================================
// Lifecycle Container
// ============================================================================

#[test]
fn test_container_keeps_store_state_across_lookups() {
    let (navigator, _) = navigator_with_log();
    let mut container: LifecycleContainer<ScopeKey, CounterStore> = LifecycleContainer::new();

    let first = container.get_or_create(ScopeKey::Root, || counter(&navigator, 3));
    first.handle(CounterEvent::Increment);

    let again = container.get_or_create(ScopeKey::Root, || counter(&navigator, 3));
    assert_eq!(again.state().count, 4);

    drop((first, again));
    assert!(container.dispose(&ScopeKey::Root));
    let fresh = container.get_or_create(ScopeKey::Root, || counter(&navigator, 3));
    assert_eq!(fresh.state().count, 3);
}

// ============================================================================
// Counter → Summary Flow
// ============================================================================

#[tokio::test]
async fn test_counter_divide_and_summary_flow() {
    LocalSet::new()
        .run_until(async {
            let (navigator, log) = navigator_with_log();
            let counter = counter(&navigator, 5);

            counter.handle(CounterEvent::Increment);
            counter.handle(CounterEvent::Increment);
            counter.handle(CounterEvent::Decrement);
            assert_eq!(counter.state().count, 6);

            counter.handle(CounterEvent::DivideByTwo);
            assert!(counter.state().is_dividing);
            settle().await;
            assert_eq!(counter.state().count, 3);
            assert!(!counter.state().is_dividing);

            counter.handle(CounterEvent::GoToSummary);
            let top = navigator.top().unwrap();
            let summary = top.screen().downcast_ref::<SummaryScreen>().unwrap();
            assert_eq!(summary.value, 3);

            let summary = SummaryStore::new(summary.clone(), navigator.handle());
            summary.handle(SummaryEvent::PrintValue);
            summary.handle(SummaryEvent::Back);
            assert_eq!(navigator.depth(), 0);

            counter.handle(CounterEvent::OpenHelp);
            assert_eq!(
                *log.borrow(),
                vec![CustomNavigationRequest::GoTo("help".to_string())]
            );
        })
        .await;
}

#[tokio::test]
async fn test_divide_after_counter_disposed_is_dropped() {
    LocalSet::new()
        .run_until(async {
            let (navigator, _) = navigator_with_log();
            let counter = counter(&navigator, 8);
            let store = Rc::downgrade(counter.store());

            counter.handle(CounterEvent::DivideByTwo);
            drop(counter);
            settle().await;

            assert!(store.upgrade().is_none());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_halving_use_case_waits_for_delay() {
    let divide = HalvingUseCase::new(Duration::from_millis(250));
    let start = tokio::time::Instant::now();
    assert_eq!(divide.execute(-9).await, -4);
    assert!(start.elapsed() >= Duration::from_millis(250));
}

#[test]
fn test_feature_outlives_navigator() {
    let (navigator, _) = navigator_with_log();
    let counter = counter(&navigator, 1);
    drop(navigator);

    // Handle is dead; navigation becomes a no-op
    counter.handle(CounterEvent::GoToSummary);
    counter.handle(CounterEvent::OpenHelp);
    assert_eq!(counter.state().count, 1);
}
