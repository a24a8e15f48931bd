//! HTML element tables

/// Elements that never have children or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `tag` is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
