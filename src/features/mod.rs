//! # Features
//!
//! The sample app: a counter at the root that pushes summary screens.
//! Each feature module holds its screen/state/event types, a store, a UI,
//! and a `make` factory. [`build_destination`] picks the factory for a
//! type-erased screen.

pub mod counter;
pub mod summary;

use std::rc::Rc;
use std::sync::Arc;

use log::warn;

use crate::core::{NavigatorHandle, Screen};
use crate::tui::host::{Destination, DestinationBuilder, EmptyDestination};
use crate::usecases::DivideUseCase;

use counter::CounterScreen;
use summary::SummaryScreen;

/// What the factories need beyond the screen and navigator.
#[derive(Clone)]
pub struct Dependencies {
    pub divide: Arc<dyn DivideUseCase>,
}

pub fn build_destination(
    screen: &Rc<dyn Screen>,
    navigator: NavigatorHandle,
    deps: &Dependencies,
) -> Rc<dyn Destination> {
    if let Some(counter) = screen.downcast_ref::<CounterScreen>() {
        return counter::make(counter.clone(), deps.divide.clone(), navigator);
    }
    if let Some(summary) = screen.downcast_ref::<SummaryScreen>() {
        return summary::make(summary.clone(), navigator);
    }
    warn!("No destination for screen {:?}", screen);
    Rc::new(EmptyDestination)
}

/// Wraps [`build_destination`] for a `NavigationHost`.
pub fn builder(deps: Dependencies) -> DestinationBuilder {
    Box::new(move |screen: &Rc<dyn Screen>, navigator: NavigatorHandle| {
        build_destination(screen, navigator, &deps)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDivideUseCase;

    #[derive(Debug)]
    struct Unknown;

    impl Screen for Unknown {}

    fn deps() -> Dependencies {
        Dependencies {
            divide: Arc::new(FakeDivideUseCase),
        }
    }

    #[test]
    fn test_dispatches_on_screen_type() {
        let counter: Rc<dyn Screen> = Rc::new(CounterScreen { initial_value: 1 });
        let summary: Rc<dyn Screen> = Rc::new(SummaryScreen { value: 1 });

        let deps = deps();
        assert_eq!(
            build_destination(&counter, NavigatorHandle::detached(), &deps).title(),
            "Counter"
        );
        assert_eq!(
            build_destination(&summary, NavigatorHandle::detached(), &deps).title(),
            "Summary"
        );
    }

    #[test]
    fn test_unknown_screen_gets_empty_destination() {
        let unknown: Rc<dyn Screen> = Rc::new(Unknown);
        let destination = build_destination(&unknown, NavigatorHandle::detached(), &deps());
        assert_eq!(destination.title(), "");
        assert!(!destination.handle_event(&crate::tui::event::TuiEvent::Enter));
    }
}
