//! # Core Runtime
//!
//! State management and navigation. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (state)        │
//!                    │  • Navigator (stack)    │
//!                    │  • Container (scopes)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Features  │      │   Tests    │
//!     │   Host     │      │ (counter,  │      │            │
//!     │ (ratatui)  │      │  summary)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Threading
//!
//! Stores and navigators are `Rc`/`RefCell` based and therefore `!Send`.
//! Everything runs on one thread; async continuations are spawned with
//! [`store::launch`] onto that thread's `LocalSet`.
//!
//! ## Modules
//!
//! - [`screen`]: `Screen`/`State`/`Event` capabilities and `StackEntry`
//! - [`store`]: `Store` with change-gated `update`, the `Feature` trait
//! - [`navigator`]: `Navigator`, `StackNavigator`, `NavigatorHandle`
//! - [`container`]: `LifecycleContainer` keyed by `ScopeKey`
//! - [`runtime`]: the `Ui` boundary and `render`
//! - [`config`]: settings resolution

pub mod config;
pub mod container;
pub mod navigator;
pub mod observer;
pub mod runtime;
pub mod screen;
pub mod store;

pub use container::{LifecycleContainer, ScopeKey};
pub use navigator::{
    CustomNavigationHandler, CustomNavigationRequest, NavigationError, NavigationState, Navigator,
    NavigatorHandle, StackNavigator,
};
pub use observer::SubscriptionId;
pub use runtime::{Emitter, Ui, render};
pub use screen::{EntryId, Event, Screen, StackEntry, State};
pub use store::{Feature, Store, launch};
