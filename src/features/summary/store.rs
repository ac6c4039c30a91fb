use std::rc::Rc;

use log::info;

use super::{SummaryEvent, SummaryScreen, SummaryState};
use crate::core::{Feature, NavigatorHandle, Store};

pub struct SummaryStore {
    store: Rc<Store<SummaryScreen, SummaryState, SummaryEvent>>,
    navigator: NavigatorHandle,
}

impl SummaryStore {
    pub fn new(screen: SummaryScreen, navigator: NavigatorHandle) -> Self {
        let initial = SummaryState {
            value: screen.value,
        };
        Self {
            store: Store::new(screen, initial),
            navigator,
        }
    }
}

impl Feature for SummaryStore {
    type Screen = SummaryScreen;
    type State = SummaryState;
    type Event = SummaryEvent;

    fn store(&self) -> &Rc<Store<SummaryScreen, SummaryState, SummaryEvent>> {
        &self.store
    }

    fn handle(&self, event: SummaryEvent) {
        match event {
            SummaryEvent::PrintValue => {
                info!("Trapezio Counter Value: {}", self.store.state().value);
            }
            SummaryEvent::Back => self.navigator.dismiss(),
        }
    }
}
