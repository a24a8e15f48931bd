//! Input component - base text input
//!
//! Renders a bare `<input class="slds-input">`. Composite controls (such as
//! the combobox) add their own classes and ARIA attributes on top.
//!
//! # Example
//!
//! ```ignore
//! use strata_cn::prelude::*;
//!
//! cn::input()
//!     .id("text-input-id-1")
//!     .placeholder("Placeholder text…")
//!
//! // Read-only with a value
//! cn::input()
//!     .value("Salesforce")
//!     .readonly(true)
//! ```

use strata_layout::prelude::*;

/// Base text input
#[derive(Clone, Debug, Default)]
pub struct Input {
    id: Option<String>,
    classes: ClassList,
    attrs: Vec<(String, String)>,
    placeholder: Option<String>,
    value: Option<String>,
    tab_index: Option<i32>,
    readonly: bool,
    disabled: bool,
    auto_focus: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id_opt(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    /// Extra classes after `slds-input`
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Set an arbitrary attribute (rendered after `id`, in call order)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn attr_opt<S: Into<String>>(self, name: impl Into<String>, value: Option<S>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Initial displayed text
    pub fn value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn tab_index(mut self, tab_index: Option<i32>) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }
}

impl ElementBuilder for Input {
    fn build(&self) -> Node {
        let mut input = el("input")
            .class("slds-input")
            .classes(self.classes.clone())
            .attr_opt("id", self.id.clone());

        for (name, value) in &self.attrs {
            input = input.attr(name.clone(), value.clone());
        }

        input
            .attr_opt("placeholder", self.placeholder.clone())
            .bool_attr("readonly", self.readonly)
            .attr_opt("value", self.value.clone())
            .attr_opt("tabindex", self.tab_index.map(|i| i.to_string()))
            .bool_attr("autofocus", self.auto_focus)
            .bool_attr("disabled", self.disabled)
            .build()
    }
}

/// Create a base text input
pub fn input() -> Input {
    Input::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_markup() {
        let html = input()
            .id("text-input-id-1")
            .attr("type", "text")
            .placeholder("Placeholder")
            .value(Some("Acme & Co".into()))
            .tab_index(Some(-1))
            .disabled(true)
            .render_html();

        assert_eq!(
            html,
            concat!(
                r#"<input class="slds-input" id="text-input-id-1" type="text" "#,
                r#"placeholder="Placeholder" value="Acme &amp; Co" tabindex="-1" disabled>"#
            )
        );
    }

    #[test]
    fn test_extra_classes() {
        let node = input()
            .classes(ClassList::new("slds-combobox__input").add_if(true, "slds-has-focus"))
            .build();
        let el = node.find_by_tag("input");

        assert!(el.is_some_and(|i| i.has_class("slds-input") && i.has_class("slds-has-focus")));
    }

    #[test]
    fn test_boolean_flags() {
        let node = input().readonly(true).auto_focus(true).build();
        let el = node.find_by_tag("input");

        assert!(el.is_some_and(|i| i.has_attr("readonly") && i.has_attr("autofocus")));
        assert!(el.is_some_and(|i| !i.has_attr("disabled")));
    }
}
