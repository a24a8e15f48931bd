//! Data-driven combobox configuration
//!
//! [`ComboboxProps`] mirrors the builder options as a serde structure so a
//! combobox can be described in a TOML or JSON file. Collaborator elements
//! (dropdown, addon, icons, selections) are raw markup fragments.
//!
//! Required options are optional here so that a file missing them still
//! loads: [`ComboboxProps::validate`] reports what is missing and
//! [`ComboboxProps::mount`] renders with fallbacks.

use serde::{Deserialize, Serialize};
use strata_core::{Event, Scope};
use strata_layout::prelude::*;
use tracing::warn;

use crate::components::combobox::{
    AddonPosition, Combobox, ComboboxGroup, ComboboxPosition, ComboboxSettings, DropdownType,
    FocusState, GroupPosition, InputIconPosition,
};
use crate::error::ConfigViolation;

/// Which component a configuration describes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboboxVariant {
    #[default]
    Combobox,
    Group,
}

/// Serializable combobox options
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxProps {
    // Required for every variant
    pub dropdown: Option<String>,
    pub dropdown_type: Option<DropdownType>,

    // Required for the group variant
    pub addon: Option<String>,
    pub addon_position: Option<AddonPosition>,
    pub combobox_position: Option<ComboboxPosition>,

    pub id: Option<String>,
    pub combobox_id: Option<String>,
    pub aria_controls: Option<String>,
    pub aria_activedescendant: Option<String>,
    pub combobox_aria_controls: Option<String>,
    pub label: Option<String>,
    pub hide_label: bool,
    pub form_class_name: Option<String>,
    pub class_name: Option<String>,
    pub input_container_class_name: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub tab_index: Option<i32>,
    pub readonly: bool,
    pub auto_focus: bool,
    pub autocomplete: bool,
    pub is_disabled: bool,
    pub input_icon_position: Option<InputIconPosition>,
    pub left_input_icon: Option<String>,
    pub right_input_icon: Option<String>,
    pub show_close_button: bool,
    pub is_loading: bool,
    pub is_open: bool,
    pub has_focus: bool,
    pub has_selection: bool,
    pub static_listbox: bool,
    pub has_interactions: bool,
    pub listbox_of_selections: Option<String>,
}

impl ComboboxProps {
    /// List every required option missing for `variant`
    pub fn validate(&self, variant: ComboboxVariant) -> Vec<ConfigViolation> {
        let mut violations = Vec::new();
        if self.dropdown.is_none() {
            violations.push(ConfigViolation::MissingDropdown);
        }
        if self.dropdown_type.is_none() {
            violations.push(ConfigViolation::MissingDropdownType);
        }
        if variant == ComboboxVariant::Group {
            if self.addon.is_none() {
                violations.push(ConfigViolation::MissingAddon);
            }
            if self.addon_position.is_none() {
                violations.push(ConfigViolation::MissingAddonPosition);
            }
            if self.combobox_position.is_none() {
                violations.push(ConfigViolation::MissingComboboxPosition);
            }
        }
        violations
    }

    /// Build the component for `variant`, mounting its state under `key`
    ///
    /// Violations are logged as warnings. Missing fragments render as
    /// nothing; missing enums fall back to listbox, addon at the start and
    /// combobox at the end.
    pub fn mount(&self, scope: &Scope, key: &str, variant: ComboboxVariant) -> ComboboxView {
        for violation in self.validate(variant) {
            warn!(key, option = violation.option(), "{}", violation);
        }

        let dropdown = fragment(&self.dropdown);
        let dropdown_type = self.dropdown_type.unwrap_or_default();

        match variant {
            ComboboxVariant::Combobox => {
                let combobox = Combobox::new(scope, key, dropdown, dropdown_type);
                ComboboxView::Single(self.apply(combobox))
            }
            ComboboxVariant::Group => {
                let group = ComboboxGroup::new(
                    scope,
                    key,
                    dropdown,
                    dropdown_type,
                    fragment(&self.addon),
                    self.addon_position.unwrap_or(GroupPosition::Start),
                    self.combobox_position.unwrap_or(GroupPosition::End),
                );
                ComboboxView::Group(self.apply(group))
            }
        }
    }

    fn apply<B: ComboboxSettings>(&self, builder: B) -> B {
        let mut b = builder
            .hide_label(self.hide_label)
            .readonly(self.readonly)
            .auto_focus(self.auto_focus)
            .autocomplete(self.autocomplete)
            .disabled(self.is_disabled)
            .show_close_button(self.show_close_button)
            .loading(self.is_loading)
            .open(self.is_open)
            .has_focus(self.has_focus)
            .has_selection(self.has_selection)
            .static_listbox(self.static_listbox)
            .has_interactions(self.has_interactions);

        if let Some(id) = &self.id {
            b = b.id(id.clone());
        }
        if let Some(id) = &self.combobox_id {
            b = b.combobox_id(id.clone());
        }
        if let Some(id) = &self.aria_controls {
            b = b.aria_controls(id.clone());
        }
        if let Some(id) = &self.aria_activedescendant {
            b = b.aria_activedescendant(id.clone());
        }
        if let Some(id) = &self.combobox_aria_controls {
            b = b.combobox_aria_controls(id.clone());
        }
        if let Some(label) = &self.label {
            b = b.label(label.clone());
        }
        if let Some(class) = &self.form_class_name {
            b = b.form_class_name(class.clone());
        }
        if let Some(class) = &self.class_name {
            b = b.class_name(class.clone());
        }
        if let Some(class) = &self.input_container_class_name {
            b = b.input_container_class_name(class.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            b = b.placeholder(placeholder.clone());
        }
        if let Some(value) = &self.value {
            b = b.value(value.clone());
        }
        if let Some(tab_index) = self.tab_index {
            b = b.tab_index(tab_index);
        }
        if let Some(position) = self.input_icon_position {
            b = b.input_icon_position(position);
        }
        if let Some(icon) = &self.left_input_icon {
            b = b.left_input_icon(raw(icon.clone()));
        }
        if let Some(icon) = &self.right_input_icon {
            b = b.right_input_icon(raw(icon.clone()));
        }
        if let Some(selections) = &self.listbox_of_selections {
            b = b.listbox_of_selections(raw(selections.clone()));
        }
        b
    }
}

fn fragment(markup: &Option<String>) -> Node {
    match markup {
        Some(markup) => Node::Raw(markup.clone()),
        None => Node::Fragment(Vec::new()),
    }
}

/// A mounted combobox of either variant
pub enum ComboboxView {
    Single(Combobox),
    Group(ComboboxGroup),
}

impl ComboboxView {
    pub fn handle_event(&self, event: &mut Event) -> bool {
        match self {
            ComboboxView::Single(c) => c.handle_event(event),
            ComboboxView::Group(g) => g.handle_event(event),
        }
    }

    pub fn focus_state(&self) -> FocusState {
        match self {
            ComboboxView::Single(c) => c.focus_state(),
            ComboboxView::Group(g) => g.focus_state(),
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            ComboboxView::Single(c) => c.is_open(),
            ComboboxView::Group(g) => g.is_open(),
        }
    }
}

impl ElementBuilder for ComboboxView {
    fn build(&self) -> Node {
        match self {
            ComboboxView::Single(c) => c.build(),
            ComboboxView::Group(g) => g.build(),
        }
    }
}
