//! # Lifecycle Container
//!
//! Keeps one instance per rendering scope alive across re-renders. A host
//! calls `get_or_create` on every frame; the factory only runs the first
//! time a scope key is seen. The instance lives until `dispose` (or
//! `retain`) drops it.
//!
//! The container holds `Rc<T>` and knows nothing about features. Async
//! continuations keep `Weak` references, so disposing a scope is enough to
//! make their late completions no-ops.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use log::debug;

use crate::core::screen::EntryId;

/// Identity of a rendering scope owned by a navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    Root,
    Entry(EntryId),
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKey::Root => write!(f, "root"),
            ScopeKey::Entry(id) => write!(f, "entry:{id}"),
        }
    }
}

pub struct LifecycleContainer<K, T: ?Sized> {
    scopes: HashMap<K, Rc<T>>,
}

impl<K, T> LifecycleContainer<K, T>
where
    K: Hash + Eq + Copy + fmt::Display,
    T: ?Sized,
{
    pub fn new() -> Self {
        Self {
            scopes: HashMap::new(),
        }
    }

    /// Returns the instance bound to `key`, creating it with `factory` if
    /// the scope is new.
    pub fn get_or_create(&mut self, key: K, factory: impl FnOnce() -> Rc<T>) -> Rc<T> {
        self.scopes
            .entry(key)
            .or_insert_with(|| {
                debug!("Scope {key} created");
                factory()
            })
            .clone()
    }

    pub fn get(&self, key: &K) -> Option<Rc<T>> {
        self.scopes.get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.scopes.contains_key(key)
    }

    /// Releases the instance held for `key`. Returns whether one existed.
    pub fn dispose(&mut self, key: &K) -> bool {
        let removed = self.scopes.remove(key).is_some();
        if removed {
            debug!("Scope {key} disposed");
        }
        removed
    }

    /// Disposes every scope for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.scopes.retain(|key, _| {
            let kept = keep(key);
            if !kept {
                debug!("Scope {key} disposed");
            }
            kept
        });
    }

    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<K, T> Default for LifecycleContainer<K, T>
where
    K: Hash + Eq + Copy + fmt::Display,
    T: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}
