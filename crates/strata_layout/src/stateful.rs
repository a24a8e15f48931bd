//! State transition tables for interactive elements
//!
//! Components describe their interaction states as a small enum and a
//! transition table keyed on [`strata_core::EventType`]:
//!
//! ```rust
//! use strata_core::event_types::{BLUR, FOCUS};
//! use strata_layout::stateful::StateTransitions;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum FieldState {
//!     Idle,
//!     Focused,
//! }
//!
//! impl StateTransitions for FieldState {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (FieldState::Idle, FOCUS) => Some(FieldState::Focused),
//!             (FieldState::Focused, BLUR) => Some(FieldState::Idle),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(FieldState::Idle.on_event(FOCUS), Some(FieldState::Focused));
//! assert_eq!(FieldState::Idle.on_event(BLUR), None);
//! ```

use std::hash::Hash;

use strata_core::EventType;

/// Trait for state types with event-driven transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::event_types::{BLUR, FOCUS};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Toggle {
        Off,
        On,
    }

    impl StateTransitions for Toggle {
        fn on_event(&self, event: EventType) -> Option<Self> {
            match (self, event) {
                (Toggle::Off, FOCUS) => Some(Toggle::On),
                (Toggle::On, BLUR) => Some(Toggle::Off),
                _ => None,
            }
        }
    }

    #[test]
    fn test_unmatched_events_do_not_transition() {
        assert_eq!(Toggle::Off.on_event(FOCUS), Some(Toggle::On));
        assert_eq!(Toggle::Off.on_event(BLUR), None);
        assert_eq!(Toggle::On.on_event(FOCUS), None);
    }
}
