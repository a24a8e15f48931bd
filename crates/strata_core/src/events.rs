//! Event types delivered to component handlers
//!
//! Only the focus family is modelled; components match on the raw
//! [`EventType`] ids in their state transition tables.

/// Raw event type id
pub type EventType = u32;

/// Event type ids
pub mod event_types {
    use super::EventType;

    /// The element received keyboard focus
    pub const FOCUS: EventType = 1;
    /// The element lost keyboard focus
    pub const BLUR: EventType = 2;
}

/// An event dispatched to a component handler
///
/// Handlers that consume the event call [`Event::prevent_default`] so the
/// host skips its built-in behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Id of the element that received the event, if known
    pub target: Option<String>,
    default_prevented: bool,
}

impl Event {
    /// Create a new event of the given type
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            target: None,
            default_prevented: false,
        }
    }

    /// Create a focus event
    pub fn focus() -> Self {
        Self::new(event_types::FOCUS)
    }

    /// Create a blur event
    pub fn blur() -> Self {
        Self::new(event_types::BLUR)
    }

    /// Set the target element id
    pub fn target(mut self, id: impl Into<String>) -> Self {
        self.target = Some(id.into());
        self
    }

    /// Suppress the host's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Human-readable event name (for logging)
    pub fn name(&self) -> &'static str {
        match self.event_type {
            event_types::FOCUS => "focus",
            event_types::BLUR => "blur",
            _ => "unknown",
        }
    }
}
