//! # Strata Component Library (strata_cn)
//!
//! Design-system form components built on `strata_layout` primitives.
//!
//! - **Primitives**: `strata_layout` provides element builders and the markup tree
//! - **State**: `strata_core` provides keyed component state and events
//! - **Components**: `strata_cn` provides the styled, accessible components
//!
//! ## Example
//!
//! ```rust
//! use strata_cn::prelude::*;
//!
//! let scope = Scope::new();
//! let listbox = raw(r#"<div id="listbox-1" class="slds-dropdown" role="listbox"></div>"#);
//!
//! let lookup = cn::combobox(&scope, "lookup", listbox, DropdownType::Listbox)
//!     .id("combobox-1")
//!     .aria_controls("listbox-1")
//!     .autocomplete(true)
//!     .has_interactions(true);
//!
//! assert!(lookup.handle_event(&mut Event::focus()));
//! let node = lookup.build();
//! let shell = node.find_by_role("combobox").map(|s| s.attr("aria-expanded"));
//! assert_eq!(shell, Some(Some("true")));
//! ```
//!
//! ## Components
//!
//! - **Label**, **FormElement** - labeled control layout
//! - **Spinner**, **ButtonIcon**, **Input** - leaf controls
//! - **Combobox**, **ComboboxGroup** - combobox with popup, optionally paired with an addon

pub mod components;
pub mod config;
pub mod error;

pub use components::*;
pub use config::{ComboboxProps, ComboboxVariant, ComboboxView};
pub use error::ConfigViolation;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button_icon::button_icon;
    pub use crate::components::combobox::{combobox, combobox_group};
    pub use crate::components::form_element::form_element;
    pub use crate::components::input::input;
    pub use crate::components::label::label;
    pub use crate::components::spinner::spinner;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::combobox::{
        AddonPosition, Combobox, ComboboxGroup, ComboboxPosition, ComboboxSettings,
        DropdownType, FocusState, InputIconPosition,
    };
    pub use crate::components::spinner::{SpinnerSize, SpinnerVariant};
    pub use strata_core::{Event, Scope};
    pub use strata_layout::prelude::*;
}
