//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::core::{CustomNavigationRequest, StackNavigator};
use crate::usecases::DivideUseCase;

/// Returns `value / 2` without waiting.
pub struct FakeDivideUseCase;

#[async_trait]
impl DivideUseCase for FakeDivideUseCase {
    async fn execute(&self, value: i64) -> i64 {
        value / 2
    }
}

/// A root-less navigator that records every custom request it receives.
pub fn recording_navigator() -> (Rc<StackNavigator>, Rc<RefCell<Vec<CustomNavigationRequest>>>) {
    let requests = Rc::new(RefCell::new(Vec::<CustomNavigationRequest>::new()));
    let sink = requests.clone();
    let navigator = StackNavigator::new(
        None,
        Some(Box::new(move |request: CustomNavigationRequest| {
            sink.borrow_mut().push(request)
        })),
    );
    (navigator, requests)
}

/// Lets spawned local continuations run to completion (or to their next
/// real suspension point). Must be awaited inside a `LocalSet`.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
