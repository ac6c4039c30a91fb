//! # Navigation
//!
//! Features ask for navigation through the `Navigator` trait and never see
//! the stack. The navigation host owns a `StackNavigator` and hands features
//! a non-owning `NavigatorHandle`.
//!
//! ```text
//! NavigationState
//! ├── root: Option<Rc<dyn Screen>>   // never touched by dismiss_to_root
//! └── path: Vec<StackEntry>          // push order; dismiss pops the last
//! ```
//!
//! Custom requests (`go_to_custom`, `dismiss_to_custom`) are an escape hatch
//! for navigation the typed stack doesn't model. They are forwarded verbatim
//! to the host callback and never touch `path`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, error, info};

use crate::core::observer::{Observers, SubscriptionId};
use crate::core::screen::{Screen, StackEntry};

/// String-keyed navigation request forwarded to the embedding host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomNavigationRequest {
    GoTo(String),
    DismissTo(String),
}

/// Host callback receiving custom navigation requests.
pub type CustomNavigationHandler = Box<dyn Fn(CustomNavigationRequest)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The navigator has no way to locate the requested entry.
    Unsupported { operation: &'static str },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Unsupported { operation } => write!(
                f,
                "{operation} is not supported by this navigator; use dismiss(), dismiss_to_root(), or a custom request"
            ),
        }
    }
}

impl std::error::Error for NavigationError {}

pub trait Navigator {
    /// Pushes `screen` onto the stack.
    fn go_to(&self, screen: Rc<dyn Screen>);

    /// Emits `CustomNavigationRequest::GoTo` to the host.
    fn go_to_custom(&self, key: &str);

    /// Pops the most recent entry. No-op on an empty stack.
    fn dismiss(&self);

    /// Clears the stack, leaving only the root.
    fn dismiss_to_root(&self);

    /// Pops back to a prior screen by value.
    fn dismiss_to(&self, screen: &dyn Screen) -> Result<(), NavigationError>;

    /// Emits `CustomNavigationRequest::DismissTo` to the host.
    fn dismiss_to_custom(&self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub root: Option<Rc<dyn Screen>>,
    pub path: Vec<StackEntry>,
}

impl NavigationState {
    /// The entry on top of the stack, if any was pushed.
    pub fn top(&self) -> Option<&StackEntry> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// The library-owned navigator that drives a stack host.
pub struct StackNavigator {
    state: RefCell<NavigationState>,
    on_custom: Option<CustomNavigationHandler>,
    observers: Observers<NavigationState>,
}

impl StackNavigator {
    pub fn new(
        root: Option<Rc<dyn Screen>>,
        on_custom: Option<CustomNavigationHandler>,
    ) -> Rc<Self> {
        if let Some(root) = &root {
            info!("StackNavigator created with root {}", root.tag());
        }
        Rc::new(Self {
            state: RefCell::new(NavigationState {
                root,
                path: Vec::new(),
            }),
            on_custom,
            observers: Observers::new(),
        })
    }

    /// A non-owning handle for features.
    pub fn handle(self: &Rc<Self>) -> NavigatorHandle {
        let weak: Weak<dyn Navigator> = Rc::downgrade(self) as Weak<dyn Navigator>;
        NavigatorHandle { inner: Some(weak) }
    }

    pub fn root(&self) -> Option<Rc<dyn Screen>> {
        self.state.borrow().root.clone()
    }

    pub fn path(&self) -> Vec<StackEntry> {
        self.state.borrow().path.clone()
    }

    pub fn top(&self) -> Option<StackEntry> {
        self.state.borrow().top().cloned()
    }

    pub fn depth(&self) -> usize {
        self.state.borrow().depth()
    }

    pub fn snapshot(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Observers fire after every change to `path`.
    pub fn subscribe(&self, observer: impl Fn(&NavigationState) + 'static) -> SubscriptionId {
        self.observers.add(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn mutate_path(&self, mutate: impl FnOnce(&mut Vec<StackEntry>) -> bool) {
        let changed = mutate(&mut self.state.borrow_mut().path);
        if changed {
            let snapshot = self.snapshot();
            debug!("Navigation path depth {}", snapshot.depth());
            self.observers
                .notify_while(&snapshot, || self.state.borrow().path == snapshot.path);
        }
    }

    fn forward(&self, request: CustomNavigationRequest) {
        match &self.on_custom {
            Some(handler) => {
                debug!("Forwarding custom request {:?}", request);
                handler(request);
            }
            None => debug!("Dropped custom request {:?}: no handler", request),
        }
    }
}

impl Navigator for StackNavigator {
    fn go_to(&self, screen: Rc<dyn Screen>) {
        let entry = StackEntry::new(screen);
        debug!("Push {} as {}", entry.screen().tag(), entry.id());
        self.mutate_path(|path| {
            path.push(entry);
            true
        });
    }

    fn go_to_custom(&self, key: &str) {
        self.forward(CustomNavigationRequest::GoTo(key.to_string()));
    }

    fn dismiss(&self) {
        self.mutate_path(|path| path.pop().is_some());
    }

    fn dismiss_to_root(&self) {
        self.mutate_path(|path| {
            let had_entries = !path.is_empty();
            path.clear();
            had_entries
        });
    }

    fn dismiss_to(&self, screen: &dyn Screen) -> Result<(), NavigationError> {
        error!(
            "dismiss_to({:?}) is not supported by StackNavigator; path left unchanged",
            screen
        );
        Err(NavigationError::Unsupported {
            operation: "dismiss_to",
        })
    }

    fn dismiss_to_custom(&self, key: &str) {
        self.forward(CustomNavigationRequest::DismissTo(key.to_string()));
    }
}

/// Non-owning navigator reference held by features.
///
/// The host controls the navigator's lifetime. Once it is gone, or when the
/// handle was created detached, every call is a silent no-op.
#[derive(Clone, Default)]
pub struct NavigatorHandle {
    inner: Option<Weak<dyn Navigator>>,
}

impl NavigatorHandle {
    pub fn new(navigator: &Rc<dyn Navigator>) -> Self {
        Self {
            inner: Some(Rc::downgrade(navigator)),
        }
    }

    /// A handle bound to nothing.
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn is_attached(&self) -> bool {
        self.upgrade().is_some()
    }

    fn upgrade(&self) -> Option<Rc<dyn Navigator>> {
        self.inner.as_ref().and_then(Weak::upgrade)
    }

    fn with(&self, operation: &str, call: impl FnOnce(&dyn Navigator)) {
        match self.upgrade() {
            Some(navigator) => call(&*navigator),
            None => debug!("{operation} ignored: no navigator bound"),
        }
    }

    pub fn go_to(&self, screen: impl Screen + 'static) {
        self.with("go_to", |n| n.go_to(Rc::new(screen)));
    }

    pub fn go_to_custom(&self, key: &str) {
        self.with("go_to_custom", |n| n.go_to_custom(key));
    }

    pub fn dismiss(&self) {
        self.with("dismiss", |n| n.dismiss());
    }

    pub fn dismiss_to_root(&self) {
        self.with("dismiss_to_root", |n| n.dismiss_to_root());
    }

    pub fn dismiss_to(&self, screen: &dyn Screen) -> Result<(), NavigationError> {
        match self.upgrade() {
            Some(navigator) => navigator.dismiss_to(screen),
            None => {
                debug!("dismiss_to ignored: no navigator bound");
                Ok(())
            }
        }
    }

    pub fn dismiss_to_custom(&self, key: &str) {
        self.with("dismiss_to_custom", |n| n.dismiss_to_custom(key));
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}
