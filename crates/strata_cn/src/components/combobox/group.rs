//! Combobox group - combobox with an attached addon
//!
//! ```ignore
//! cn::combobox_group(
//!     &scope,
//!     "object-switcher",
//!     listbox,
//!     DropdownType::Listbox,
//!     object_switcher,
//!     AddonPosition::Start,
//!     ComboboxPosition::End,
//! )
//! .label("Relate to")
//! .has_selection(true)
//! .listbox_of_selections(pills)
//! ```

use strata_core::{Event, Scope};
use strata_layout::prelude::*;
use tracing::trace;

use super::options::{
    AddonPosition, ComboboxOptions, ComboboxPosition, ComboboxSettings, DropdownType,
};
use super::parts::ComboboxGroupContainer;
use super::shell::{ComboboxShell, FocusState};

/// Combobox rendered next to a caller-supplied addon
pub struct ComboboxGroup {
    shell: ComboboxShell,
    addon: Box<dyn ElementBuilder>,
    addon_position: AddonPosition,
    combobox_position: ComboboxPosition,
}

impl ComboboxGroup {
    /// Mount (or re-attach to) the group instance `key`
    pub fn new(
        scope: &Scope,
        key: impl Into<String>,
        dropdown: impl ElementBuilder + 'static,
        dropdown_type: DropdownType,
        addon: impl ElementBuilder + 'static,
        addon_position: AddonPosition,
        combobox_position: ComboboxPosition,
    ) -> Self {
        Self {
            shell: ComboboxShell::new(scope, key, Box::new(dropdown), dropdown_type),
            addon: Box::new(addon),
            addon_position,
            combobox_position,
        }
    }

    pub fn key(&self) -> &str {
        self.shell.key()
    }

    pub fn focus_state(&self) -> FocusState {
        self.shell.focus_state()
    }

    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    pub fn dropdown_type(&self) -> DropdownType {
        self.shell.dropdown_type()
    }

    pub fn addon_position(&self) -> AddonPosition {
        self.addon_position
    }

    pub fn combobox_position(&self) -> ComboboxPosition {
        self.combobox_position
    }

    /// Deliver a focus or blur event from the input
    pub fn handle_event(&self, event: &mut Event) -> bool {
        self.shell.handle_event(event)
    }

    /// Discard this instance's state from the scope
    pub fn unmount(self, scope: &Scope) {
        scope.unmount(self.shell.key());
    }
}

impl ComboboxSettings for ComboboxGroup {
    fn options_mut(&mut self) -> &mut ComboboxOptions {
        &mut self.shell.options
    }
}

impl ElementBuilder for ComboboxGroup {
    fn build(&self) -> Node {
        trace!(key = %self.shell.key(), open = self.is_open(), "rendering combobox group");

        let has_selection = self.shell.options.has_selection;
        let container = self
            .shell
            .container(Some(self.combobox_position), false);

        let group = ComboboxGroupContainer::new().has_selection(has_selection);
        let group = match self.addon_position {
            AddonPosition::Start => group.child(self.addon.build()).child(container),
            AddonPosition::End => group.child(container).child(self.addon.build()),
        };

        // Pills only show while something is selected
        let selections = if has_selection {
            self.shell.selections()
        } else {
            None
        };

        self.shell
            .form_element()
            .child(group)
            .child_opt(selections)
            .build()
    }
}

/// Create (or re-render) a combobox group instance
pub fn combobox_group(
    scope: &Scope,
    key: impl Into<String>,
    dropdown: impl ElementBuilder + 'static,
    dropdown_type: DropdownType,
    addon: impl ElementBuilder + 'static,
    addon_position: AddonPosition,
    combobox_position: ComboboxPosition,
) -> ComboboxGroup {
    ComboboxGroup::new(
        scope,
        key,
        dropdown,
        dropdown_type,
        addon,
        addon_position,
        combobox_position,
    )
}
