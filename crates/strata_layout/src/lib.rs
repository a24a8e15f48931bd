//! Strata Layout
//!
//! Markup primitives with a fluent builder API. Builders produce a [`Node`]
//! tree that serializes to HTML.
//!
//! # Example
//!
//! ```rust
//! use strata_layout::prelude::*;
//!
//! let ui = div()
//!     .class("slds-combobox")
//!     .role("combobox")
//!     .aria("expanded", "false")
//!     .child(el("input").attr("type", "text"));
//!
//! let node = ui.build();
//! assert!(node.find_by_role("combobox").is_some());
//! assert_eq!(
//!     node.to_html(),
//!     r#"<div class="slds-combobox" role="combobox" aria-expanded="false"><input type="text"></div>"#
//! );
//! ```

pub mod class_list;
pub mod div;
pub mod html;
pub mod node;
pub mod stateful;

pub use class_list::ClassList;
pub use div::{div, el, raw, text, Div, ElementBuilder, Raw, Text};
pub use node::{AttrValue, ElementNode, Node};
pub use stateful::StateTransitions;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::class_list::ClassList;
    pub use crate::div::{div, el, raw, text, Div, ElementBuilder, Raw, Text};
    pub use crate::node::{AttrValue, ElementNode, Node};
    pub use crate::stateful::StateTransitions;
}
