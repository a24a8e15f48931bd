//! Keyed component state
//!
//! A [`Scope`] owns the reactive graph, the keyed hook table and the dirty
//! flag for one rendering root. Components create internal state through it
//! without leaking implementation details to the caller:
//!
//! ```ignore
//! // Before: caller manages internal component state
//! let focused = scope.use_state_keyed("lookup", "focused", || false);
//! cn::combobox(&focused, ...)
//!
//! // After: component manages its own state via the scope
//! cn::combobox(&scope, "lookup", dropdown, DropdownType::Listbox)
//! ```
//!
//! # Lifecycle
//!
//! State is created the first time an owner asks for a key (mount), reused
//! on every later request (re-render), and disposed by [`Scope::unmount`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::reactive::{
    lock_graph, DirtyFlag, ReactiveGraph, ReactiveStats, SharedReactiveGraph, Signal, SignalId,
    State,
};

/// Key for identifying a signal in the keyed state system
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hash of the owner and slot name
    key_hash: u64,
    /// Type ID of the signal value
    type_id: TypeId,
}

impl StateKey {
    /// Create a new StateKey from a hashable key and type
    pub fn new<T: 'static, K: Hash>(key: &K) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        key.hash(&mut hasher);
        Self {
            key_hash: hasher.finish(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create a StateKey for a named slot of an owner
    pub fn for_slot<T: 'static>(owner: &str, slot: &str) -> Self {
        Self::new::<T, _>(&(owner, slot))
    }
}

/// Stores keyed state across rebuilds
#[derive(Default)]
pub struct HookState {
    /// Keyed signals: key -> raw signal ID
    signals: FxHashMap<StateKey, u64>,
    /// Keys registered by each owner, for unmount
    owners: FxHashMap<String, SmallVec<[StateKey; 2]>>,
}

impl HookState {
    /// Create a new HookState
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an existing signal by key
    pub fn get(&self, key: &StateKey) -> Option<u64> {
        self.signals.get(key).copied()
    }

    /// Store a signal with the given key on behalf of an owner
    pub fn insert(&mut self, owner: &str, key: StateKey, signal_id: u64) {
        self.owners
            .entry(owner.to_string())
            .or_default()
            .push(key.clone());
        self.signals.insert(key, signal_id);
    }

    /// Remove every key an owner registered, returning the raw signal IDs
    pub fn remove_owner(&mut self, owner: &str) -> Vec<u64> {
        self.owners
            .remove(owner)
            .unwrap_or_default()
            .iter()
            .filter_map(|key| self.signals.remove(key))
            .collect()
    }

    /// Whether the owner currently has any registered state
    pub fn is_mounted(&self, owner: &str) -> bool {
        self.owners.contains_key(owner)
    }
}

/// Owner of keyed component state for one rendering root
#[derive(Clone, Default)]
pub struct Scope {
    reactive: SharedReactiveGraph,
    hooks: Arc<Mutex<HookState>>,
    dirty_flag: DirtyFlag,
}

impl Scope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            hooks: Arc::new(Mutex::new(HookState::new())),
            dirty_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    fn hooks(&self) -> MutexGuard<'_, HookState> {
        self.hooks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a persistent state value that survives across rebuilds
    ///
    /// The first call for an `(owner, slot)` pair creates the signal with
    /// `init()`; later calls return a handle to the same signal.
    pub fn use_state_keyed<T, F>(&self, owner: &str, slot: &str, init: F) -> State<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::for_slot::<T>(owner, slot);
        let mut hooks = self.hooks();

        let signal = if let Some(raw_id) = hooks.get(&state_key) {
            Signal::from_id(SignalId::from_raw(raw_id))
        } else {
            let signal = lock_graph(&self.reactive).create_signal(init());
            hooks.insert(owner, state_key, signal.id().to_raw());
            debug!(owner, slot, "mounted component state");
            signal
        };

        State::new(
            signal,
            Arc::clone(&self.reactive),
            Arc::clone(&self.dirty_flag),
        )
    }

    /// Dispose every signal an owner created
    ///
    /// Returns the number of signals dropped. Handles held past this point
    /// read back defaults.
    pub fn unmount(&self, owner: &str) -> usize {
        let ids = self.hooks().remove_owner(owner);
        let mut graph = lock_graph(&self.reactive);
        let dropped = ids
            .into_iter()
            .filter(|raw| graph.dispose_signal(SignalId::from_raw(*raw)))
            .count();
        debug!(owner, dropped, "unmounted component state");
        dropped
    }

    /// Whether an owner has live state in this scope
    pub fn is_mounted(&self, owner: &str) -> bool {
        self.hooks().is_mounted(owner)
    }

    /// Whether a rebuild has been requested since the last [`Scope::take_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty_flag.load(Ordering::SeqCst)
    }

    /// Read and clear the rebuild request
    pub fn take_dirty(&self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }

    /// Statistics about the underlying graph
    pub fn stats(&self) -> ReactiveStats {
        lock_graph(&self.reactive).stats()
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_state_persists_across_calls() {
        let scope = Scope::new();

        let first = scope.use_state_keyed("lookup", "focused", || false);
        first.set(true);

        // Re-render: init is ignored, same signal returned
        let second = scope.use_state_keyed("lookup", "focused", || false);
        assert!(second.get());
        assert_eq!(first.signal_id(), second.signal_id());
        assert_eq!(scope.stats().signal_count, 1);
    }

    #[test]
    fn test_owners_are_isolated() {
        let scope = Scope::new();

        let a = scope.use_state_keyed("a", "focused", || false);
        let b = scope.use_state_keyed("b", "focused", || false);
        a.set(true);

        assert!(a.get());
        assert!(!b.get());
    }

    #[test]
    fn test_slot_type_is_part_of_key() {
        let scope = Scope::new();

        let flag = scope.use_state_keyed("a", "value", || true);
        let text = scope.use_state_keyed("a", "value", || "x".to_string());
        assert_ne!(flag.signal_id(), text.signal_id());
    }

    #[test]
    fn test_unmount_resets_state() {
        let scope = Scope::new();

        let state = scope.use_state_keyed("lookup", "focused", || false);
        state.set(true);
        assert!(scope.is_mounted("lookup"));

        assert_eq!(scope.unmount("lookup"), 1);
        assert!(!scope.is_mounted("lookup"));
        assert!(state.try_get().is_err());

        let remounted = scope.use_state_keyed("lookup", "focused", || false);
        assert!(!remounted.get());
    }

    #[test]
    fn test_unmount_unknown_owner() {
        let scope = Scope::new();
        assert_eq!(scope.unmount("missing"), 0);
    }

    #[test]
    fn test_dirty_flag() {
        let scope = Scope::new();
        let state = scope.use_state_keyed("lookup", "focused", || false);

        state.set(true);
        assert!(!scope.is_dirty());

        state.set_rebuild(false);
        assert!(scope.is_dirty());
        assert!(scope.take_dirty());
        assert!(!scope.is_dirty());
    }
}
