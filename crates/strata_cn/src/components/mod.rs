//! Themed components built on strata_layout primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `label("Account")`)
//! - Variant/size enums where the design system has them
//! - Implements `ElementBuilder` for rendering

pub mod button_icon;
pub mod combobox;
pub mod form_element;
pub mod input;
pub mod label;
pub mod spinner;

pub use button_icon::{button_icon, ButtonIcon};
pub use combobox::{
    combobox, combobox_group, AddonPosition, Combobox, ComboboxGroup, ComboboxPosition,
    ComboboxSettings, DropdownType, FocusState, GroupPosition, InputIconPosition,
};
pub use form_element::{form_element, FormElement};
pub use input::{input, Input};
pub use label::{label, Label};
pub use spinner::{spinner, Spinner, SpinnerSize, SpinnerVariant};
