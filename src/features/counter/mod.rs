//! # Counter
//!
//! The root feature: a number that can be incremented, decremented, halved
//! through an async use case, and handed to the summary screen.

mod store;
mod ui;

pub use store::CounterStore;
pub use ui::{CounterUi, CounterView};

use std::rc::Rc;
use std::sync::Arc;

use crate::core::{NavigatorHandle, Screen};
use crate::tui::host::{Destination, FeatureDestination};
use crate::usecases::DivideUseCase;

/// Route key sent as a custom navigation request by `OpenHelp`.
pub const HELP_ROUTE: &str = "help";

#[derive(Debug, Clone, PartialEq)]
pub struct CounterScreen {
    pub initial_value: i64,
}

impl Screen for CounterScreen {
    fn tag(&self) -> &'static str {
        "counter"
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    pub count: i64,
    pub is_dividing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    DivideByTwo,
    GoToSummary,
    OpenHelp,
}

/// Builds the counter destination. This is where DI would hand out the
/// real use case.
pub fn make(
    screen: CounterScreen,
    divide: Arc<dyn DivideUseCase>,
    navigator: NavigatorHandle,
) -> Rc<dyn Destination> {
    Rc::new(FeatureDestination::new(
        "Counter",
        CounterStore::new(screen, divide, navigator),
        CounterUi,
    ))
}
