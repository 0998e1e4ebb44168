//! Document abstraction
//!
//! The tooltip never touches a concrete UI toolkit. Everything it needs from
//! its host (element lookup, attributes, inline styles, geometry and node
//! creation) goes through the [`Document`] trait. [`MemoryDocument`] is the
//! in-memory implementation used by the terminal demo and the tests.

mod memory;
mod offset;
mod selector;

use std::fmt;

pub use memory::MemoryDocument;
pub use offset::{Point, document_offset};
pub use selector::Selector;

/// Opaque identity of a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn from_raw(raw: u64) -> Self {
        ElementId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host document operations used by the tooltip widget.
///
/// Geometry follows the DOM box model: `offset_left`/`offset_top` are
/// relative to `offset_parent`, and outer sizes include borders. Tag names are
/// reported upper-case, as `Element.tagName` does.
///
/// Mutating a node that no longer exists is a silent no-op, mirroring how a
/// DOM ignores writes to a node that has been dropped from the tree.
pub trait Document {
    fn body(&self) -> ElementId;
    fn contains(&self, id: ElementId) -> bool;
    /// True when the node is the body or one of its descendants
    fn is_attached(&self, id: ElementId) -> bool;
    fn tag_name(&self, id: ElementId) -> Option<&str>;
    fn children(&self, id: ElementId) -> Vec<ElementId>;

    fn attribute(&self, id: ElementId, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);

    fn offset_parent(&self, id: ElementId) -> Option<ElementId>;
    fn offset_left(&self, id: ElementId) -> f64;
    fn offset_top(&self, id: ElementId) -> f64;
    fn scroll_left(&self, id: ElementId) -> f64;
    fn scroll_top(&self, id: ElementId) -> f64;
    fn outer_width(&self, id: ElementId) -> f64;
    fn outer_height(&self, id: ElementId) -> f64;
    fn viewport_width(&self) -> f64;

    fn create_element(&mut self, tag: &str) -> ElementId;
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    /// Detach the node (and its subtree) and drop it
    fn remove(&mut self, id: ElementId);

    fn style(&self, id: ElementId, property: &str) -> Option<&str>;
    fn set_style(&mut self, id: ElementId, property: &str, value: &str);
    fn inner_html(&self, id: ElementId) -> Option<&str>;
    fn set_inner_html(&mut self, id: ElementId, html: &str);

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let classes = match self.attribute(id, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &classes);
    }

    /// Attached elements matching `selector`, in document order.
    ///
    /// An unparseable selector matches nothing.
    fn select(&self, selector: &str) -> Vec<ElementId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut stack = vec![self.body()];
        while let Some(id) = stack.pop() {
            if selector.matches(self, id) {
                found.push(id);
            }
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
        found
    }
}

#[cfg(test)]
#[path = "dom/memory_tests.rs"]
mod memory_tests;

#[cfg(test)]
#[path = "dom/offset_tests.rs"]
mod offset_tests;
