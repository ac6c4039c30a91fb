//! # Navigation Host
//!
//! Owns the `StackNavigator` and renders whichever entry is on top (the
//! root when the path is empty). Each scope's destination lives in a
//! `LifecycleContainer`, so re-rendering never rebuilds a store:
//!
//! ```text
//! path: [root, Summary#a, Summary#b]
//!                                │
//!        container[Entry(b)] ◀───┘  get_or_create on every frame
//! ```
//!
//! After each dispatch, `sync()` disposes scopes whose entries have left the
//! path. Entries still on the stack keep their destination (and state) so
//! going back shows them as they were.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::runtime;
use crate::core::{
    CustomNavigationHandler, Feature, LifecycleContainer, Navigator, NavigatorHandle, ScopeKey,
    Screen, StackNavigator, SubscriptionId, Ui,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// A rendered navigation destination.
pub trait Destination {
    fn title(&self) -> &str;

    fn render(&self, frame: &mut Frame, area: Rect);

    /// Returns `true` if the destination consumed the event.
    fn handle_event(&self, event: &TuiEvent) -> bool;

    /// Registers a callback fired whenever the destination's state changes.
    fn watch(&self, on_change: Rc<dyn Fn()>);
}

/// Builds a destination for a screen. Supplied by the application.
pub type DestinationBuilder = Box<dyn Fn(&Rc<dyn Screen>, NavigatorHandle) -> Rc<dyn Destination>>;

/// A feature bound to a UI. Views are rebuilt from the current state for
/// every render and every event.
pub struct FeatureDestination<F: Feature, U> {
    title: &'static str,
    feature: Rc<F>,
    ui: U,
    subscription: Cell<Option<SubscriptionId>>,
}

impl<F, U> FeatureDestination<F, U>
where
    F: Feature,
    U: Ui<State = F::State, Event = F::Event>,
    U::View: Component + EventHandler,
{
    pub fn new(title: &'static str, feature: F, ui: U) -> Self {
        Self {
            title,
            feature: Rc::new(feature),
            ui,
            subscription: Cell::new(None),
        }
    }

    pub fn feature(&self) -> &Rc<F> {
        &self.feature
    }
}

impl<F, U> Destination for FeatureDestination<F, U>
where
    F: Feature,
    U: Ui<State = F::State, Event = F::Event>,
    U::View: Component + EventHandler,
{
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut view = runtime::render(&self.feature, &self.ui);
        view.render(frame, area);
    }

    fn handle_event(&self, event: &TuiEvent) -> bool {
        let mut view = runtime::render(&self.feature, &self.ui);
        view.handle_event(event)
    }

    fn watch(&self, on_change: Rc<dyn Fn()>) {
        let store = self.feature.store();
        if let Some(previous) = self.subscription.take() {
            store.unsubscribe(previous);
        }
        let id = store.subscribe(move |_| on_change());
        self.subscription.set(Some(id));
    }
}

impl<F: Feature, U> Drop for FeatureDestination<F, U> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.feature.store().unsubscribe(id);
        }
        debug!("{} destination dropped", self.title);
    }
}

/// Fallback for screens the builder doesn't recognize.
pub struct EmptyDestination;

impl Destination for EmptyDestination {
    fn title(&self) -> &str {
        ""
    }

    fn render(&self, _frame: &mut Frame, _area: Rect) {}

    fn handle_event(&self, _event: &TuiEvent) -> bool {
        false
    }

    fn watch(&self, _on_change: Rc<dyn Fn()>) {}
}

pub struct NavigationHost {
    navigator: Rc<StackNavigator>,
    container: RefCell<LifecycleContainer<ScopeKey, dyn Destination>>,
    builder: DestinationBuilder,
    on_change: Rc<dyn Fn()>,
}

impl NavigationHost {
    /// `on_change` fires whenever the path or the visible state changes.
    pub fn new(
        root: Rc<dyn Screen>,
        on_custom_navigation: Option<CustomNavigationHandler>,
        builder: DestinationBuilder,
        on_change: Rc<dyn Fn()>,
    ) -> Self {
        let navigator = StackNavigator::new(Some(root), on_custom_navigation);
        let redraw = on_change.clone();
        navigator.subscribe(move |_| redraw());
        info!("Navigation host mounted");
        Self {
            navigator,
            container: RefCell::new(LifecycleContainer::new()),
            builder,
            on_change,
        }
    }

    pub fn navigator(&self) -> &Rc<StackNavigator> {
        &self.navigator
    }

    pub fn depth(&self) -> usize {
        self.navigator.depth()
    }

    /// Number of live destination scopes.
    pub fn scope_count(&self) -> usize {
        self.container.borrow().len()
    }

    fn current_scope(&self) -> Option<(ScopeKey, Rc<dyn Screen>)> {
        match self.navigator.top() {
            Some(entry) => Some((ScopeKey::Entry(entry.id()), entry.screen().clone())),
            None => self.navigator.root().map(|root| (ScopeKey::Root, root)),
        }
    }

    /// The destination on top of the stack, created on first request.
    pub fn current(&self) -> Option<Rc<dyn Destination>> {
        let (key, screen) = self.current_scope()?;
        let destination = self.container.borrow_mut().get_or_create(key, || {
            debug!("Building destination for {} ({})", screen.tag(), key);
            let destination = (self.builder)(&screen, self.navigator.handle());
            destination.watch(self.on_change.clone());
            destination
        });
        Some(destination)
    }

    pub fn current_title(&self) -> String {
        self.current()
            .map(|d| d.title().to_string())
            .unwrap_or_default()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(destination) = self.current() {
            destination.render(frame, area);
        }
    }

    /// Offers the event to the current destination, then applies host
    /// navigation for unconsumed `Escape` (pop) and `r` (pop to root).
    pub fn handle_event(&self, event: &TuiEvent) -> bool {
        let consumed = self
            .current()
            .is_some_and(|destination| destination.handle_event(event));

        let handled = consumed
            || match event {
                TuiEvent::Escape => {
                    self.navigator.dismiss();
                    true
                }
                TuiEvent::Char('r') => {
                    self.navigator.dismiss_to_root();
                    true
                }
                _ => false,
            };

        self.sync();
        handled
    }

    /// Disposes scopes whose entries are no longer on the path.
    pub fn sync(&self) {
        let live: HashSet<_> = self
            .navigator
            .path()
            .iter()
            .map(|entry| ScopeKey::Entry(entry.id()))
            .collect();
        self.container
            .borrow_mut()
            .retain(|key| *key == ScopeKey::Root || live.contains(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Page(&'static str);

    impl Screen for Page {}

    /// Pushes a `Page("next")` on Enter, pops via its navigator on 'b'.
    struct PageDestination {
        name: &'static str,
        navigator: NavigatorHandle,
    }

    impl Destination for PageDestination {
        fn title(&self) -> &str {
            self.name
        }

        fn render(&self, _frame: &mut Frame, _area: Rect) {}

        fn handle_event(&self, event: &TuiEvent) -> bool {
            match event {
                TuiEvent::Enter => {
                    self.navigator.go_to(Page("next"));
                    true
                }
                TuiEvent::Char('b') => {
                    self.navigator.dismiss();
                    true
                }
                _ => false,
            }
        }

        fn watch(&self, _on_change: Rc<dyn Fn()>) {}
    }

    fn host_with_counters() -> (NavigationHost, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let built = Rc::new(Cell::new(0));
        let changes = Rc::new(Cell::new(0));
        let b = built.clone();
        let c = changes.clone();
        let host = NavigationHost::new(
            Rc::new(Page("root")),
            None,
            Box::new(move |screen: &Rc<dyn Screen>, navigator: NavigatorHandle| -> Rc<dyn Destination> {
                b.set(b.get() + 1);
                let name = screen.downcast_ref::<Page>().map_or("?", |p| p.0);
                Rc::new(PageDestination { name, navigator })
            }),
            Rc::new(move || c.set(c.get() + 1)),
        );
        (host, built, changes)
    }

    #[test]
    fn test_root_is_current_when_path_empty() {
        let (host, _, _) = host_with_counters();
        assert_eq!(host.current_title(), "root");
        assert_eq!(host.depth(), 0);
    }

    #[test]
    fn test_repeated_current_reuses_destination() {
        let (host, built, _) = host_with_counters();
        let first = host.current().unwrap();
        let second = host.current().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(built.get(), 1);
    }

    #[test]
    fn test_push_builds_new_scope_and_notifies() {
        let (host, built, changes) = host_with_counters();
        host.current();
        assert!(host.handle_event(&TuiEvent::Enter));

        assert_eq!(host.depth(), 1);
        assert_eq!(host.current_title(), "next");
        assert_eq!(built.get(), 2);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn test_duplicate_pushes_get_separate_scopes() {
        let (host, built, _) = host_with_counters();
        host.handle_event(&TuiEvent::Enter);
        host.current();
        host.handle_event(&TuiEvent::Enter);
        host.current();

        assert_eq!(host.depth(), 2);
        assert_eq!(host.scope_count(), 3);
        assert_eq!(built.get(), 3);
    }

    #[test]
    fn test_pop_disposes_scope_and_keeps_root() {
        let (host, built, _) = host_with_counters();
        let root = host.current().unwrap();
        host.handle_event(&TuiEvent::Enter);
        host.current();
        assert_eq!(host.scope_count(), 2);

        assert!(host.handle_event(&TuiEvent::Char('b')));
        assert_eq!(host.scope_count(), 1);
        assert!(Rc::ptr_eq(&root, &host.current().unwrap()));
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_unconsumed_escape_and_r_navigate() {
        let (host, _, _) = host_with_counters();
        host.handle_event(&TuiEvent::Enter);
        host.current();
        host.handle_event(&TuiEvent::Enter);
        host.current();

        assert!(host.handle_event(&TuiEvent::Escape));
        assert_eq!(host.depth(), 1);
        assert!(host.handle_event(&TuiEvent::Char('r')));
        assert_eq!(host.depth(), 0);
        assert_eq!(host.scope_count(), 1);

        assert!(!host.handle_event(&TuiEvent::Char('x')));
    }
}
