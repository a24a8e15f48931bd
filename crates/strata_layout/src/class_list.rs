//! Conditional CSS class composition
//!
//! ```rust
//! use strata_layout::ClassList;
//!
//! let is_open = true;
//! let classes = ClassList::new("slds-combobox")
//!     .add_if(is_open, "slds-is-open")
//!     .add_opt(None::<&str>);
//!
//! assert_eq!(classes.to_string(), "slds-combobox slds-is-open");
//! ```

use smallvec::SmallVec;
use std::fmt;

/// An ordered, space-joined list of CSS class names
///
/// Empty names are skipped, and an entry may carry several space-separated
/// classes (e.g. `"slds-dropdown-trigger slds-dropdown-trigger_click"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Create a list starting with one entry
    pub fn new(base: impl Into<String>) -> Self {
        Self::default().add(base)
    }

    /// Create an empty list
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn add(mut self, class: impl Into<String>) -> Self {
        self.push(class);
        self
    }

    /// Append an entry when `condition` holds
    pub fn add_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    /// Append an entry when present
    pub fn add_opt<S: Into<String>>(self, class: Option<S>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    /// Append an entry in place
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        let trimmed = class.trim();
        if trimmed.is_empty() {
            return;
        }
        if trimmed.len() == class.len() {
            self.classes.push(class);
        } else {
            self.classes.push(trimmed.to_string());
        }
    }

    /// Append every entry of another list
    pub fn extend(mut self, other: &ClassList) -> Self {
        self.classes.extend(other.classes.iter().cloned());
        self
    }

    /// Whether the list contains `class` as a single class name
    pub fn contains(&self, class: &str) -> bool {
        self.classes
            .iter()
            .any(|entry| entry.split_whitespace().any(|c| c == class))
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(class: &str) -> Self {
        ClassList::new(class)
    }
}

impl From<String> for ClassList {
    fn from(class: String) -> Self {
        ClassList::new(class)
    }
}
