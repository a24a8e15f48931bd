//! Fluent element builder
//!
//! Provides a builder API for creating markup elements:
//! ```rust
//! use strata_layout::prelude::*;
//!
//! let ui = div()
//!     .class("slds-form-element")
//!     .child(
//!         el("label")
//!             .class("slds-form-element__label")
//!             .attr("for", "combobox-id-1")
//!             .child(text("Relate to")),
//!     );
//!
//! assert_eq!(
//!     ui.build().to_html(),
//!     r#"<div class="slds-form-element"><label class="slds-form-element__label" for="combobox-id-1">Relate to</label></div>"#
//! );
//! ```

use indexmap::IndexMap;

use crate::class_list::ClassList;
use crate::node::{AttrValue, ElementNode, Node};

/// Anything that can be turned into markup
pub trait ElementBuilder: Send {
    /// Build this element into a markup node
    fn build(&self) -> Node;

    /// Serialize straight to HTML
    fn render_html(&self) -> String {
        self.build().to_html()
    }
}

/// An element builder
pub struct Div {
    tag: String,
    classes: ClassList,
    attrs: IndexMap<String, AttrValue>,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl Default for Div {
    fn default() -> Self {
        Self::new()
    }
}

impl Div {
    /// Create a new `<div>` element
    pub fn new() -> Self {
        Self::with_tag("div")
    }

    /// Create a new element with an arbitrary tag
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: ClassList::empty(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Append a class entry
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class);
        self
    }

    /// Append a class entry when `condition` holds
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Append every entry of a class list
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = self.classes.extend(&classes);
        self
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Set an attribute (replaces an earlier value in place)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .insert(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set an attribute when a value is present
    pub fn attr_opt<S: Into<String>>(self, name: impl Into<String>, value: Option<S>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute when `present` is true
    pub fn bool_attr(mut self, name: impl Into<String>, present: bool) -> Self {
        let name = name.into();
        if present {
            self.attrs.insert(name, AttrValue::Present);
        } else {
            self.attrs.shift_remove(&name);
        }
        self
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `role` attribute
    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    /// Set an `aria-*` attribute
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{}", name), value)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append an already boxed child
    pub fn child_box(mut self, child: Box<dyn ElementBuilder>) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child when present
    pub fn child_opt(self, child: Option<impl ElementBuilder + 'static>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children
    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: ElementBuilder + 'static,
    {
        for child in children {
            self.children.push(Box::new(child));
        }
        self
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl ElementBuilder for Div {
    fn build(&self) -> Node {
        let mut attrs = IndexMap::with_capacity(self.attrs.len() + 1);
        if !self.classes.is_empty() {
            attrs.insert(
                "class".to_string(),
                AttrValue::Text(self.classes.to_string()),
            );
        }
        for (name, value) in &self.attrs {
            attrs.insert(name.clone(), value.clone());
        }

        Node::Element(ElementNode {
            tag: self.tag.clone(),
            attrs,
            children: self.children.iter().map(|c| c.build()).collect(),
        })
    }
}

impl ElementBuilder for Node {
    fn build(&self) -> Node {
        self.clone()
    }
}

impl ElementBuilder for Box<dyn ElementBuilder> {
    fn build(&self) -> Node {
        self.as_ref().build()
    }
}

/// Text content (escaped on output)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl ElementBuilder for Text {
    fn build(&self) -> Node {
        Node::Text(self.content.clone())
    }
}

/// Verbatim markup supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raw {
    markup: String,
}

impl ElementBuilder for Raw {
    fn build(&self) -> Node {
        Node::Raw(self.markup.clone())
    }
}

/// Create a new `<div>` element builder
pub fn div() -> Div {
    Div::new()
}

/// Create an element builder with an arbitrary tag
pub fn el(tag: impl Into<String>) -> Div {
    Div::with_tag(tag)
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Text {
    Text {
        content: content.into(),
    }
}

/// Create a verbatim markup node
pub fn raw(markup: impl Into<String>) -> Raw {
    Raw {
        markup: markup.into(),
    }
}
