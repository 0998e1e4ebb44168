use super::{Document, ElementId};

/// Compound selector: optional tag, optional `#id`, any number of `.class`
///
/// Covers the forms used to bind tooltips in bulk (`a`, `.hastip`, `#save`,
/// `button.hastip`). Combinators and attribute selectors are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut selector = Selector::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            let tag = &rest[..tag_end];
            if tag != "*" {
                selector.tag = Some(tag.to_ascii_uppercase());
            }
            rest = &rest[tag_end..];
        }

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                _ => return None,
            }
            rest = &body[end..];
        }

        Some(selector)
    }

    pub fn matches<D: Document + ?Sized>(&self, doc: &D, id: ElementId) -> bool {
        if let Some(tag) = &self.tag {
            if doc.tag_name(id) != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.id {
            if doc.attribute(id, "id") != Some(wanted.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| doc.has_class(id, class))
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
