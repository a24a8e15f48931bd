//! Combobox component - text input with a popup listbox or dialog
//!
//! A design-system combobox exposing ARIA combobox semantics. The caller
//! supplies the dropdown markup; the component renders the labeled shell,
//! the input with its icons, and tracks whether it is focused.
//!
//! # Example
//!
//! ```ignore
//! use strata_cn::prelude::*;
//!
//! let scope = Scope::new();
//!
//! let lookup = cn::combobox(&scope, "account-lookup", listbox, DropdownType::Listbox)
//!     .id("combobox-id-1")
//!     .label("Account")
//!     .aria_controls("listbox-id-1")
//!     .autocomplete(true)
//!     .has_interactions(true);
//!
//! let html = lookup.render_html();
//!
//! // Focus opens the popup and asks the owner to rebuild
//! lookup.handle_event(&mut Event::focus());
//! assert!(scope.take_dirty());
//!
//! // Forget the focus state when the combobox goes away
//! lookup.unmount(&scope);
//! ```

mod group;
mod options;
mod parts;
mod shell;

pub use group::{combobox_group, ComboboxGroup};
pub use options::{
    AddonPosition, ComboboxOptions, ComboboxPosition, ComboboxSettings, DropdownType,
    GroupPosition, InputIconPosition,
};
pub use parts::{
    ComboboxContainer, ComboboxFormElement, ComboboxGroupContainer, ComboboxInput,
    AUTOCOMPLETE_PLACEHOLDER, MISSING_LISTBOX_ID, REMOVE_SELECTION_TEXT, SELECT_PLACEHOLDER,
};
pub use shell::FocusState;

use strata_core::{Event, Scope};
use strata_layout::prelude::*;
use tracing::trace;

use shell::ComboboxShell;

/// Combobox component
///
/// Construct one per render with [`combobox`]; the focus state lives in the
/// [`Scope`] under the instance key, so it survives rebuilds.
pub struct Combobox {
    shell: ComboboxShell,
}

impl Combobox {
    /// Mount (or re-attach to) the combobox instance `key`
    pub fn new(
        scope: &Scope,
        key: impl Into<String>,
        dropdown: impl ElementBuilder + 'static,
        dropdown_type: DropdownType,
    ) -> Self {
        Self {
            shell: ComboboxShell::new(scope, key, Box::new(dropdown), dropdown_type),
        }
    }

    /// Instance key in the owning scope
    pub fn key(&self) -> &str {
        self.shell.key()
    }

    /// Current focus state
    pub fn focus_state(&self) -> FocusState {
        self.shell.focus_state()
    }

    /// Whether the popup is shown (`open` option or focused)
    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    pub fn dropdown_type(&self) -> DropdownType {
        self.shell.dropdown_type()
    }

    /// Deliver a focus or blur event from the input
    ///
    /// Returns whether the focus state changed.
    pub fn handle_event(&self, event: &mut Event) -> bool {
        self.shell.handle_event(event)
    }

    /// Discard this instance's state from the scope
    pub fn unmount(self, scope: &Scope) {
        scope.unmount(self.shell.key());
    }
}

impl ComboboxSettings for Combobox {
    fn options_mut(&mut self) -> &mut ComboboxOptions {
        &mut self.shell.options
    }
}

impl ElementBuilder for Combobox {
    fn build(&self) -> Node {
        trace!(key = %self.shell.key(), open = self.is_open(), "rendering combobox");

        let has_selection = self.shell.options.has_selection;
        self.shell
            .form_element()
            .child(self.shell.container(None, has_selection))
            .child_opt(self.shell.selections())
            .build()
    }
}

/// Create (or re-render) a combobox instance
pub fn combobox(
    scope: &Scope,
    key: impl Into<String>,
    dropdown: impl ElementBuilder + 'static,
    dropdown_type: DropdownType,
) -> Combobox {
    Combobox::new(scope, key, dropdown, dropdown_type)
}
