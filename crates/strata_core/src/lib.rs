//! Strata Core Runtime
//!
//! This crate provides the foundational primitives for the Strata component
//! library:
//!
//! - **Reactive Signals**: typed signals stored in a slot-keyed graph
//! - **Keyed State**: per-instance component state that survives rebuilds
//! - **Events**: focus/blur events with default-action suppression
//!
//! # Example
//!
//! ```rust
//! use strata_core::Scope;
//!
//! let scope = Scope::new();
//! let focused = scope.use_state_keyed("lookup", "focused", || false);
//!
//! focused.set_rebuild(true);
//! assert!(focused.get());
//! assert!(scope.take_dirty());
//!
//! scope.unmount("lookup");
//! assert!(!scope.is_mounted("lookup"));
//! ```

pub mod error;
pub mod events;
pub mod reactive;
pub mod scope;

pub use error::ScopeError;
pub use events::{event_types, Event, EventType};
pub use reactive::{
    DirtyFlag, ReactiveGraph, ReactiveStats, SharedReactiveGraph, Signal, SignalId, State,
};
pub use scope::{HookState, Scope, StateKey};
