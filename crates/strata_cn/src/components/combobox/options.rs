//! Combobox configuration shared by the single and grouped variants

use serde::{Deserialize, Serialize};
use strata_layout::prelude::*;

/// Kind of popup the combobox controls (the `aria-haspopup` value)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownType {
    #[default]
    Listbox,
    Dialog,
}

impl DropdownType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownType::Listbox => "listbox",
            DropdownType::Dialog => "dialog",
        }
    }
}

/// Where the input icons sit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputIconPosition {
    Left,
    Right,
    LeftRight,
    GroupRight,
}

impl InputIconPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputIconPosition::Left => "left",
            InputIconPosition::Right => "right",
            InputIconPosition::LeftRight => "left-right",
            InputIconPosition::GroupRight => "group-right",
        }
    }

    /// `slds-input-has-icon_<position>`
    pub fn class(&self) -> String {
        format!("slds-input-has-icon_{}", self.as_str())
    }
}

/// Side of the group an element is attached to
///
/// Used both for the addon (`addonPosition`) and for the combobox container
/// (`comboboxPosition`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPosition {
    Start,
    End,
}

impl GroupPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupPosition::Start => "start",
            GroupPosition::End => "end",
        }
    }
}

/// Position of the addon relative to the combobox
pub type AddonPosition = GroupPosition;

/// Position of the combobox relative to the addon
pub type ComboboxPosition = GroupPosition;

/// Optional settings common to both combobox variants
///
/// Defaults: every flag false, every id/text unset.
#[derive(Default)]
pub struct ComboboxOptions {
    // Identity and ARIA references
    pub id: Option<String>,
    pub combobox_id: Option<String>,
    pub aria_controls: Option<String>,
    pub aria_activedescendant: Option<String>,
    pub combobox_aria_controls: Option<String>,

    // Label
    pub label: Option<String>,
    pub hide_label: bool,

    // Styling
    pub form_class_name: Option<String>,
    pub class_name: Option<String>,
    pub input_container_class_name: Option<String>,

    // Input
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub tab_index: Option<i32>,
    pub readonly: bool,
    pub auto_focus: bool,
    pub autocomplete: bool,
    pub is_disabled: bool,

    // Icons
    pub input_icon_position: Option<InputIconPosition>,
    pub left_input_icon: Option<Box<dyn ElementBuilder>>,
    pub right_input_icon: Option<Box<dyn ElementBuilder>>,
    pub show_close_button: bool,
    pub is_loading: bool,

    // State flags
    pub is_open: bool,
    pub has_focus: bool,
    pub has_selection: bool,
    pub static_listbox: bool,
    pub has_interactions: bool,

    // Selections shown under the control
    pub listbox_of_selections: Option<Box<dyn ElementBuilder>>,
}

/// Builder methods shared by [`super::Combobox`] and [`super::ComboboxGroup`]
pub trait ComboboxSettings: Sized {
    /// Access the shared options
    fn options_mut(&mut self) -> &mut ComboboxOptions;

    /// Id of the input (also the label's `for`)
    fn id(mut self, id: impl Into<String>) -> Self {
        self.options_mut().id = Some(id.into());
        self
    }

    /// Id of the `role="combobox"` element
    fn combobox_id(mut self, id: impl Into<String>) -> Self {
        self.options_mut().combobox_id = Some(id.into());
        self
    }

    /// Id of the listbox the input controls
    fn aria_controls(mut self, id: impl Into<String>) -> Self {
        self.options_mut().aria_controls = Some(id.into());
        self
    }

    /// Id of the currently highlighted option
    fn aria_activedescendant(mut self, id: impl Into<String>) -> Self {
        self.options_mut().aria_activedescendant = Some(id.into());
        self
    }

    /// `aria-controls` on the combobox element itself
    fn combobox_aria_controls(mut self, id: impl Into<String>) -> Self {
        self.options_mut().combobox_aria_controls = Some(id.into());
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.options_mut().label = Some(label.into());
        self
    }

    fn hide_label(mut self, hide: bool) -> Self {
        self.options_mut().hide_label = hide;
        self
    }

    /// Extra class on the form element wrapper
    fn form_class_name(mut self, class: impl Into<String>) -> Self {
        self.options_mut().form_class_name = Some(class.into());
        self
    }

    /// Extra class on the combobox container
    fn class_name(mut self, class: impl Into<String>) -> Self {
        self.options_mut().class_name = Some(class.into());
        self
    }

    /// Extra class on the input's container
    fn input_container_class_name(mut self, class: impl Into<String>) -> Self {
        self.options_mut().input_container_class_name = Some(class.into());
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options_mut().placeholder = Some(placeholder.into());
        self
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.options_mut().value = Some(value.into());
        self
    }

    fn tab_index(mut self, tab_index: i32) -> Self {
        self.options_mut().tab_index = Some(tab_index);
        self
    }

    fn readonly(mut self, readonly: bool) -> Self {
        self.options_mut().readonly = readonly;
        self
    }

    fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.options_mut().auto_focus = auto_focus;
        self
    }

    /// Filter-as-you-type mode (`aria-autocomplete="list"`)
    fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.options_mut().autocomplete = autocomplete;
        self
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.options_mut().is_disabled = disabled;
        self
    }

    fn input_icon_position(mut self, position: InputIconPosition) -> Self {
        self.options_mut().input_icon_position = Some(position);
        self
    }

    fn left_input_icon(mut self, icon: impl ElementBuilder + 'static) -> Self {
        self.options_mut().left_input_icon = Some(Box::new(icon));
        self
    }

    fn right_input_icon(mut self, icon: impl ElementBuilder + 'static) -> Self {
        self.options_mut().right_input_icon = Some(Box::new(icon));
        self
    }

    /// Show the trailing "remove selected option" button
    fn show_close_button(mut self, show: bool) -> Self {
        self.options_mut().show_close_button = show;
        self
    }

    /// Show a spinner next to the close button
    fn loading(mut self, loading: bool) -> Self {
        self.options_mut().is_loading = loading;
        self
    }

    /// Force the open state regardless of focus
    fn open(mut self, open: bool) -> Self {
        self.options_mut().is_open = open;
        self
    }

    /// Render the input with the focus style
    fn has_focus(mut self, has_focus: bool) -> Self {
        self.options_mut().has_focus = has_focus;
        self
    }

    fn has_selection(mut self, has_selection: bool) -> Self {
        self.options_mut().has_selection = has_selection;
        self
    }

    /// The dropdown is always visible rather than toggled
    fn static_listbox(mut self, static_listbox: bool) -> Self {
        self.options_mut().static_listbox = static_listbox;
        self
    }

    /// Let focus/blur events drive the open state
    fn has_interactions(mut self, has_interactions: bool) -> Self {
        self.options_mut().has_interactions = has_interactions;
        self
    }

    /// Pills for the current selection, rendered below the control
    fn listbox_of_selections(mut self, selections: impl ElementBuilder + 'static) -> Self {
        self.options_mut().listbox_of_selections = Some(Box::new(selections));
        self
    }
}
