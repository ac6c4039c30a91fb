//! # Runtime
//!
//! The boundary between a feature and whatever draws it. A `Ui` maps the
//! current state plus an `Emitter` to a view; the view sends events back
//! through the emitter, which calls `Feature::handle`.
//!
//! ```text
//! Feature::state() ──▶ Ui::map(state, emit) ──▶ View
//!        ▲                                       │
//!        └──────── Feature::handle(event) ◀── emit(event)
//! ```

use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::core::store::Feature;

/// Sends events to a sink, usually a feature's `handle`.
pub struct Emitter<E> {
    sink: Rc<dyn Fn(E)>,
}

impl<E: 'static> Emitter<E> {
    pub fn new(sink: impl Fn(E) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    pub fn emit(&self, event: E) {
        (self.sink)(event);
    }
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
        }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Emitter")
    }
}

/// Renders a state snapshot. Implementations never touch the store.
pub trait Ui {
    type State;
    type Event;
    type View;

    fn map(&self, state: &Self::State, emit: Emitter<Self::Event>) -> Self::View;
}

/// An emitter that forwards to `feature.handle`. It holds a weak reference,
/// so emitting into a disposed feature does nothing.
pub fn emitter_for<F: Feature>(feature: &Rc<F>) -> Emitter<F::Event> {
    let weak: Weak<F> = Rc::downgrade(feature);
    Emitter::new(move |event: F::Event| match weak.upgrade() {
        Some(feature) => {
            debug!("Event {:?}", event);
            feature.handle(event);
        }
        None => debug!("Event {:?} dropped: feature disposed", event),
    })
}

/// Binds a feature's current state to a UI.
pub fn render<F, U>(feature: &Rc<F>, ui: &U) -> U::View
where
    F: Feature,
    U: Ui<State = F::State, Event = F::Event>,
{
    ui.map(&feature.state(), emitter_for(feature))
}
