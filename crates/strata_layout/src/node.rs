//! Built markup tree
//!
//! Element builders produce a [`Node`] tree, which serializes to HTML and
//! supports simple structural queries (by id, class, tag, or attribute).

use indexmap::IndexMap;

use crate::html::is_void;

/// An attribute value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`
    Text(String),
    /// Bare boolean attribute (`disabled`, `readonly`, ...)
    Present,
}

impl AttrValue {
    /// The attribute's text, if it carries one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(value) => Some(value),
            AttrValue::Present => None,
        }
    }
}

/// A built element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: IndexMap<String, AttrValue>,
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Get an attribute's text value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Whether an attribute is set at all (text or boolean)
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether the `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A node in the built markup tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(ElementNode),
    /// Escaped on output
    Text(String),
    /// Inserted verbatim (opaque caller-supplied markup)
    Raw(String),
    /// Children without a wrapping element
    Fragment(Vec<Node>),
}

impl Node {
    /// Serialize to an HTML string
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize into an existing buffer
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    if let AttrValue::Text(value) = value {
                        out.push_str("=\"");
                        html_escape::encode_double_quoted_attribute_to_string(value, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if is_void(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
            Node::Text(text) => {
                html_escape::encode_text_to_string(text, out);
            }
            Node::Raw(markup) => out.push_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }

    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Depth-first search for the first element matching `pred`
    pub fn find<F>(&self, pred: F) -> Option<&ElementNode>
    where
        F: Fn(&ElementNode) -> bool,
    {
        self.find_dyn(&pred)
    }

    fn find_dyn(&self, pred: &dyn Fn(&ElementNode) -> bool) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => {
                if pred(el) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_dyn(pred))
            }
            Node::Fragment(children) => children.iter().find_map(|c| c.find_dyn(pred)),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    /// Every element matching `pred`, in document order
    pub fn find_all<F>(&self, pred: F) -> Vec<&ElementNode>
    where
        F: Fn(&ElementNode) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matching(&pred, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        pred: &dyn Fn(&ElementNode) -> bool,
        found: &mut Vec<&'a ElementNode>,
    ) {
        match self {
            Node::Element(el) => {
                if pred(el) {
                    found.push(el);
                }
                for child in &el.children {
                    child.collect_matching(pred, found);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_matching(pred, found);
                }
            }
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    /// First element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        self.find(|el| el.has_class(class))
    }

    /// First element with `tag`
    pub fn find_by_tag(&self, tag: &str) -> Option<&ElementNode> {
        self.find(|el| el.tag == tag)
    }

    /// First element whose `role` attribute equals `role`
    pub fn find_by_role(&self, role: &str) -> Option<&ElementNode> {
        self.find(|el| el.attr("role") == Some(role))
    }

    /// Whether any raw fragment contains `needle`
    pub fn contains_raw(&self, needle: &str) -> bool {
        match self {
            Node::Raw(markup) => markup.contains(needle),
            Node::Element(el) => el.children.iter().any(|c| c.contains_raw(needle)),
            Node::Fragment(children) => children.iter().any(|c| c.contains_raw(needle)),
            Node::Text(_) => false,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Raw(_) => {}
        }
    }
}
