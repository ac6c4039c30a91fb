//! # Store
//!
//! Owns one feature's state and publishes changes to observers.
//!
//! ```text
//! Event ──▶ Feature::handle() ──▶ Store::update(transform)
//!                                      │
//!                         next != current?
//!                          │          │
//!                         yes         no ──▶ nothing happens
//!                          │
//!                 replace + notify observers once
//! ```
//!
//! A store is `Rc`-shared and uses `RefCell` internally, so it is `!Send`:
//! all mutation happens on the thread that created it. Async work spawned
//! from `handle` goes through [`launch`], which keeps the continuation on
//! that same thread.

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use log::debug;

use crate::core::observer::{Observers, SubscriptionId};
use crate::core::screen::{Event, Screen, State};

pub struct Store<S, St, E> {
    screen: S,
    state: RefCell<St>,
    observers: Observers<St>,
    _event: PhantomData<fn(E)>,
}

impl<S: Screen, St: State, E: Event> Store<S, St, E> {
    pub fn new(screen: S, initial_state: St) -> Rc<Self> {
        debug!("Store created for {}", screen.tag());
        Rc::new(Self {
            screen,
            state: RefCell::new(initial_state),
            observers: Observers::new(),
            _event: PhantomData,
        })
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Clone of the current state.
    pub fn state(&self) -> St {
        self.state.borrow().clone()
    }

    /// Applies `transform` to a copy of the state and publishes the result
    /// only if it differs from the current value.
    ///
    /// Returns `true` when observers were notified.
    pub fn update(&self, transform: impl FnOnce(&mut St)) -> bool {
        let mut next = self.state();
        transform(&mut next);

        if *self.state.borrow() == next {
            return false;
        }

        debug!("{} state -> {:?}", self.screen.tag(), next);
        self.state.replace(next.clone());
        // A re-entrant update publishes its own value; stop handing out this one
        self.observers
            .notify_while(&next, || *self.state.borrow() == next);
        true
    }

    /// Registers an observer called synchronously after every published change.
    pub fn subscribe(&self, observer: impl Fn(&St) + 'static) -> SubscriptionId {
        self.observers.add(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<S, St, E> Drop for Store<S, St, E> {
    fn drop(&mut self) {
        debug!("Store dropped ({} observers)", self.observers.len());
    }
}

/// A feature: a store plus the logic that turns events into transitions.
///
/// Implementors hold their collaborators (use cases, a `NavigatorHandle`)
/// next to the store and override `handle`.
pub trait Feature: 'static {
    type Screen: Screen;
    type State: State;
    type Event: Event;

    fn store(&self) -> &Rc<Store<Self::Screen, Self::State, Self::Event>>;

    /// Default is a no-op. Faults from collaborators must be folded into
    /// state here; nothing escapes to the host.
    fn handle(&self, _event: Self::Event) {}

    fn state(&self) -> Self::State {
        self.store().state()
    }
}

/// Spawns a continuation on the current thread's `LocalSet`.
///
/// Continuations should hold a `Weak` to their store so that a late
/// completion after disposal does nothing.
pub fn launch<F>(future: F) -> tokio::task::JoinHandle<()>
where
    F: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(future)
}
