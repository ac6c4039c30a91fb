//! # Screens, States, Events
//!
//! A `Screen` is a blueprint for a navigation destination ("counter screen
//! with initial value 10"). It is a value, not a key: two equal screens can
//! sit on the same stack. Identity on the stack comes from `StackEntry`,
//! which wraps a screen with a fresh `EntryId` on every push.
//!
//! ```text
//! StackEntry
//! ├── id: EntryId              // v4 UUID, the only thing Eq/Hash look at
//! └── screen: Rc<dyn Screen>   // type-erased blueprint
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use uuid::Uuid;

/// Upcast helper so a `&dyn Screen` can be downcast to its concrete type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A navigation destination descriptor.
///
/// Feature crates declare plain structs and opt in with an empty impl:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct CounterScreen { pub initial_value: i64 }
///
/// impl Screen for CounterScreen {}
/// ```
pub trait Screen: AsAny + fmt::Debug + 'static {
    /// Type tag used in logs and by hosts that dispatch on screen kind.
    fn tag(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Screen {
    pub fn is<T: Screen>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Screen>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// A feature's state snapshot. Anything cloneable and comparable qualifies.
pub trait State: Clone + PartialEq + fmt::Debug + 'static {}

impl<T: Clone + PartialEq + fmt::Debug + 'static> State for T {}

/// An action delivered to a feature. Values are transient.
pub trait Event: fmt::Debug + 'static {}

impl<T: fmt::Debug + 'static> Event for T {}

/// Opaque per-push identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slot of a navigation stack.
///
/// Equality and hashing use `id` only. Two entries pushed from equal
/// screens are never equal to each other.
#[derive(Clone)]
pub struct StackEntry {
    id: EntryId,
    screen: Rc<dyn Screen>,
}

impl StackEntry {
    pub fn new(screen: Rc<dyn Screen>) -> Self {
        Self::with_id(screen, EntryId::new())
    }

    pub fn with_id(screen: Rc<dyn Screen>, id: EntryId) -> Self {
        Self { id, screen }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn screen(&self) -> &Rc<dyn Screen> {
        &self.screen
    }
}

impl PartialEq for StackEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StackEntry {}

impl Hash for StackEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("id", &self.id.to_string())
            .field("screen", &self.screen)
            .finish()
    }
}
