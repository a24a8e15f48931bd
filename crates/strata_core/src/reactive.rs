//! Reactive signal storage
//!
//! Signals live in a [`ReactiveGraph`] keyed by [`SignalId`]. Every write bumps
//! the graph's global version.
//!
//! # State
//!
//! The [`State<T>`] type wraps a signal with shared access to the graph and
//! the owner's dirty flag. It's the primary API for component state.
//!
//! ```ignore
//! use strata_core::Scope;
//!
//! let scope = Scope::new();
//! let focused = scope.use_state_keyed("account-lookup", "focused", || false);
//!
//! // Read the current value
//! let value = focused.get();
//!
//! // Write and ask the owner to rebuild
//! focused.set_rebuild(!value);
//! assert!(scope.take_dirty());
//! ```

use slotmap::{new_key_type, SlotMap};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ScopeError;

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
}

/// A reactive signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Reconstruct a Signal from a raw SignalId
    ///
    /// The caller must ensure the SignalId refers to a signal of type T.
    /// Reads through a mistyped handle return `None`, they never panic.
    pub fn from_id(id: SignalId) -> Self {
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }
}

impl SignalId {
    /// Convert to raw u64 for storage
    pub fn to_raw(&self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Reconstruct from raw u64
    pub fn from_raw(raw: u64) -> Self {
        slotmap::KeyData::from_ffi(raw).into()
    }
}

/// Internal signal node storage
struct SignalNode {
    /// The signal value (type-erased)
    value: Box<dyn Any + Send>,
}

/// Owns every signal created for a scope
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    /// Bumped on every write to any signal
    global_version: u64,
}

impl ReactiveGraph {
    /// Create a new reactive graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            global_version: 0,
        }
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal
    ///
    /// Writes to a disposed signal are dropped.
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        if let Some(node) = self.signals.get_mut(signal.id) {
            node.value = Box::new(value);
            self.global_version += 1;
        }
    }

    /// Remove a signal from the graph
    pub fn dispose_signal(&mut self, id: SignalId) -> bool {
        self.signals.remove(id).is_some()
    }

    /// Whether the signal is still alive
    pub fn contains(&self, id: SignalId) -> bool {
        self.signals.contains_key(id)
    }

    /// Get statistics about the reactive graph
    pub fn stats(&self) -> ReactiveStats {
        ReactiveStats {
            signal_count: self.signals.len(),
            global_version: self.global_version,
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the reactive graph
#[derive(Debug, Clone)]
pub struct ReactiveStats {
    pub signal_count: usize,
    pub global_version: u64,
}

// =============================================================================
// STATE - High-level API for component state management
// =============================================================================

/// Shared reactive graph
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag for triggering UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

/// Lock the shared graph, recovering the guard if a previous holder panicked
pub(crate) fn lock_graph(graph: &SharedReactiveGraph) -> MutexGuard<'_, ReactiveGraph> {
    graph.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A bound state value with direct get/set methods
///
/// Wraps a signal together with the graph it lives in and the owner's dirty
/// flag. Cloning a `State` clones the handle, not the value.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("signal", &self.signal.id())
            .finish()
    }
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a new State wrapper
    pub fn new(signal: Signal<T>, reactive: SharedReactiveGraph, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            reactive,
            dirty_flag,
        }
    }

    /// Get the current value
    ///
    /// Falls back to `T::default()` once the owning instance is unmounted.
    pub fn get(&self) -> T
    where
        T: Default,
    {
        lock_graph(&self.reactive)
            .get(self.signal)
            .unwrap_or_default()
    }

    /// Get the current value, failing if the signal was disposed
    pub fn try_get(&self) -> Result<T, ScopeError> {
        let graph = lock_graph(&self.reactive);
        if !graph.contains(self.signal.id()) {
            return Err(ScopeError::SignalDisposed);
        }
        graph.get(self.signal).ok_or(ScopeError::TypeMismatch {
            expected: std::any::type_name::<T>(),
        })
    }

    /// Set a new value without requesting a rebuild
    pub fn set(&self, value: T) {
        lock_graph(&self.reactive).set(self.signal, value);
    }

    /// Set a new value AND request a rebuild from the owner
    pub fn set_rebuild(&self, value: T) {
        lock_graph(&self.reactive).set(self.signal, value);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Get the signal ID
    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}
