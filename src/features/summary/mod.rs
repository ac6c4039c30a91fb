//! # Summary
//!
//! A secondary screen showing the value it was pushed with.

mod store;
mod ui;

pub use store::SummaryStore;
pub use ui::{SummaryUi, SummaryView};

use std::rc::Rc;

use crate::core::{NavigatorHandle, Screen};
use crate::tui::host::{Destination, FeatureDestination};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryScreen {
    pub value: i64,
}

impl Screen for SummaryScreen {
    fn tag(&self) -> &'static str {
        "summary"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryState {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryEvent {
    PrintValue,
    Back,
}

pub fn make(screen: SummaryScreen, navigator: NavigatorHandle) -> Rc<dyn Destination> {
    Rc::new(FeatureDestination::new(
        "Summary",
        SummaryStore::new(screen, navigator),
        SummaryUi,
    ))
}
