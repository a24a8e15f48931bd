//! State and rendering shared by both combobox variants
//!
//! The shell owns the focus state machine and renders the
//! `ComboboxFormElement > ComboboxInput + dropdown` subtree. The variants
//! only differ in how that subtree is wrapped.

use strata_core::event_types::{BLUR, FOCUS};
use strata_core::{Event, EventType, Scope, State};
use strata_layout::prelude::*;
use tracing::{debug, trace};

use super::options::{ComboboxOptions, ComboboxPosition, DropdownType};
use super::parts::{ComboboxContainer, ComboboxFormElement, ComboboxInput};
use crate::components::form_element::FormElement;

/// Slot name of the focus state within an instance
const FOCUS_SLOT: &str = "focused";

/// Focus state of a combobox instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

impl FocusState {
    pub fn is_focused(&self) -> bool {
        matches!(self, FocusState::Focused)
    }
}

impl StateTransitions for FocusState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (FocusState::Unfocused, FOCUS) => Some(FocusState::Focused),
            (FocusState::Focused, BLUR) => Some(FocusState::Unfocused),
            _ => None,
        }
    }
}

/// Shared core of `Combobox` and `ComboboxGroup`
pub(crate) struct ComboboxShell {
    key: String,
    focus: State<FocusState>,
    dropdown: Box<dyn ElementBuilder>,
    dropdown_type: DropdownType,
    pub(crate) options: ComboboxOptions,
}

impl ComboboxShell {
    /// Mount (or re-attach to) the instance identified by `key`
    pub(crate) fn new(
        scope: &Scope,
        key: impl Into<String>,
        dropdown: Box<dyn ElementBuilder>,
        dropdown_type: DropdownType,
    ) -> Self {
        let key = key.into();
        let focus = scope.use_state_keyed(&key, FOCUS_SLOT, FocusState::default);
        Self {
            key,
            focus,
            dropdown,
            dropdown_type,
            options: ComboboxOptions::default(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn focus_state(&self) -> FocusState {
        self.focus.get()
    }

    /// Open when forced by the caller or while focused
    pub(crate) fn is_open(&self) -> bool {
        self.options.is_open || self.focus_state().is_focused()
    }

    pub(crate) fn dropdown_type(&self) -> DropdownType {
        self.dropdown_type
    }

    /// Run a focus/blur event through the state machine
    ///
    /// Only instances with `has_interactions` react: they suppress the
    /// default action and apply the transition, requesting a rebuild when
    /// the state changed. Returns whether the state changed.
    pub(crate) fn handle_event(&self, event: &mut Event) -> bool {
        if !self.options.has_interactions {
            trace!(key = %self.key, event = event.name(), "combobox ignores event without interactions");
            return false;
        }

        event.prevent_default();

        let current = self.focus.get();
        match current.on_event(event.event_type) {
            Some(next) => {
                debug!(key = %self.key, event = event.name(), from = ?current, to = ?next, "combobox focus transition");
                self.focus.set_rebuild(next);
                true
            }
            None => false,
        }
    }

    fn input(&self) -> ComboboxInput {
        let o = &self.options;
        ComboboxInput {
            id: o.id.clone(),
            class: o.input_container_class_name.clone(),
            placeholder: o.placeholder.clone(),
            value: o.value.clone(),
            has_focus: o.has_focus,
            autocomplete: o.autocomplete,
            show_close_button: o.show_close_button,
            is_loading: o.is_loading,
            icon_position: o.input_icon_position,
            left_icon: o.left_input_icon.as_ref().map(|icon| icon.build()),
            right_icon: o.right_input_icon.as_ref().map(|icon| icon.build()),
            tab_index: o.tab_index,
            readonly: o.readonly,
            auto_focus: o.auto_focus,
            aria_controls: o.aria_controls.clone(),
            aria_activedescendant: o.aria_activedescendant.clone(),
            disabled: o.is_disabled,
        }
    }

    /// `ComboboxContainer > ComboboxFormElement > (input, dropdown)`
    ///
    /// `position` is set by the group variant; the single variant puts the
    /// selection class on the container instead.
    pub(crate) fn container(&self, position: Option<ComboboxPosition>, has_selection: bool) -> Node {
        let o = &self.options;
        let combobox = ComboboxFormElement::new(self.dropdown_type)
            .open(self.is_open())
            .static_listbox(o.static_listbox)
            .aria_controls(o.combobox_aria_controls.clone())
            .id(o.combobox_id.clone())
            .child(self.input().build())
            .child(self.dropdown.build());

        ComboboxContainer::new()
            .position(position)
            .has_selection(has_selection)
            .class(o.class_name.clone())
            .child(combobox.build())
            .build()
    }

    /// The labeled form element wrapper
    pub(crate) fn form_element(&self) -> FormElement {
        let o = &self.options;
        FormElement::new()
            .id(o.id.clone())
            .label(o.label.clone())
            .hide_label(o.hide_label)
            .class(o.form_class_name.clone())
    }

    /// The caller's selection pills, if any
    pub(crate) fn selections(&self) -> Option<Node> {
        self.options
            .listbox_of_selections
            .as_ref()
            .map(|selections| selections.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_transitions() {
        assert_eq!(FocusState::Unfocused.on_event(FOCUS), Some(FocusState::Focused));
        assert_eq!(FocusState::Focused.on_event(BLUR), Some(FocusState::Unfocused));
        assert_eq!(FocusState::Focused.on_event(FOCUS), None);
        assert_eq!(FocusState::Unfocused.on_event(BLUR), None);
    }

    #[test]
    fn test_handle_event_without_interactions() {
        let scope = Scope::new();
        let shell = ComboboxShell::new(&scope, "lookup", Box::new(div()), DropdownType::Listbox);

        let mut event = Event::focus();
        assert!(!shell.handle_event(&mut event));
        assert!(!event.default_prevented());
        assert_eq!(shell.focus_state(), FocusState::Unfocused);
        assert!(!scope.is_dirty());
    }

    #[test]
    fn test_handle_event_with_interactions() {
        let scope = Scope::new();
        let mut shell = ComboboxShell::new(&scope, "lookup", Box::new(div()), DropdownType::Listbox);
        shell.options.has_interactions = true;

        let mut focus = Event::focus();
        assert!(shell.handle_event(&mut focus));
        assert!(focus.default_prevented());
        assert!(shell.is_open());
        assert!(scope.take_dirty());

        // Repeated focus is not a transition
        let mut again = Event::focus();
        assert!(!shell.handle_event(&mut again));
        assert!(again.default_prevented());
        assert!(!scope.is_dirty());

        let mut blur = Event::blur();
        assert!(shell.handle_event(&mut blur));
        assert!(!shell.is_open());
    }

    #[test]
    fn test_is_open_forced() {
        let scope = Scope::new();
        let mut shell = ComboboxShell::new(&scope, "lookup", Box::new(div()), DropdownType::Dialog);
        assert!(!shell.is_open());

        shell.options.is_open = true;
        assert!(shell.is_open());
        assert_eq!(shell.dropdown_type(), DropdownType::Dialog);
    }
}
