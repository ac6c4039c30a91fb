use std::rc::Rc;
use std::sync::Arc;

use log::debug;

use super::{CounterEvent, CounterScreen, CounterState, HELP_ROUTE};
use crate::core::{Feature, NavigatorHandle, Store, launch};
use crate::features::summary::SummaryScreen;
use crate::usecases::DivideUseCase;

pub struct CounterStore {
    store: Rc<Store<CounterScreen, CounterState, CounterEvent>>,
    divide: Arc<dyn DivideUseCase>,
    navigator: NavigatorHandle,
}

impl CounterStore {
    pub fn new(
        screen: CounterScreen,
        divide: Arc<dyn DivideUseCase>,
        navigator: NavigatorHandle,
    ) -> Self {
        let initial = CounterState {
            count: screen.initial_value,
            is_dividing: false,
        };
        Self {
            store: Store::new(screen, initial),
            divide,
            navigator,
        }
    }

    fn divide_by_two(&self) {
        let value = self.store.state().count;
        self.store.update(|s| s.is_dividing = true);

        let divide = self.divide.clone();
        let store = Rc::downgrade(&self.store);
        launch(async move {
            let result = divide.execute(value).await;
            match store.upgrade() {
                Some(store) => {
                    store.update(|s| {
                        s.count = result;
                        s.is_dividing = false;
                    });
                }
                None => debug!("Divide result {} dropped: counter disposed", result),
            }
        });
    }
}

impl Feature for CounterStore {
    type Screen = CounterScreen;
    type State = CounterState;
    type Event = CounterEvent;

    fn store(&self) -> &Rc<Store<CounterScreen, CounterState, CounterEvent>> {
        &self.store
    }

    fn handle(&self, event: CounterEvent) {
        match event {
            CounterEvent::Increment => {
                self.store.update(|s| s.count += 1);
            }
            CounterEvent::Decrement => {
                self.store.update(|s| s.count -= 1);
            }
            CounterEvent::DivideByTwo => self.divide_by_two(),
            CounterEvent::GoToSummary => {
                let value = self.store.state().count;
                self.navigator.go_to(SummaryScreen { value });
            }
            CounterEvent::OpenHelp => self.navigator.go_to_custom(HELP_ROUTE),
        }
    }
}
