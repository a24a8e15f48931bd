//! Form element - labeled control wrapper
//!
//! ```ignore
//! cn::form_element()
//!     .id("combobox-id-1")
//!     .label(Some("Account".into()))
//!     .child(control)
//! ```

use strata_layout::prelude::*;

use super::label::Label;

/// Standard layout container for a labeled control
#[derive(Default)]
pub struct FormElement {
    id: Option<String>,
    label: Option<String>,
    hide_label: bool,
    class: Option<String>,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl FormElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the wrapped control (the label's `for`)
    pub fn id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn hide_label(mut self, hide: bool) -> Self {
        self.hide_label = hide;
        self
    }

    /// Extra class on the outer container
    pub fn class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    /// Append a child inside the control container
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn child_opt(self, child: Option<impl ElementBuilder + 'static>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }
}

impl ElementBuilder for FormElement {
    fn build(&self) -> Node {
        let label = Label::untitled()
            .text(self.label.clone())
            .for_id_opt(self.id.clone())
            .hidden(self.hide_label);

        let control = div()
            .class("slds-form-element__control")
            .children(self.children.iter().map(|c| c.build()));

        div()
            .class("slds-form-element")
            .class(self.class.clone().unwrap_or_default())
            .child(label)
            .child(control)
            .build()
    }
}

/// Create a form element wrapper
pub fn form_element() -> FormElement {
    FormElement::new()
}
