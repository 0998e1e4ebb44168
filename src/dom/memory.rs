//! In-memory document
//!
//! Arena of nodes with explicit box geometry. Elements without an explicit
//! box are measured from their text, one cell per column and row plus a
//! single-cell border on each side, which is how the terminal host draws them.

use std::collections::BTreeMap;

use unicode_width::UnicodeWidthStr;

use super::{Document, ElementId};

const BORDER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct BoxModel {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: BTreeMap<String, String>,
    styles: Vec<(String, String)>,
    inner_html: String,
    layout: Option<BoxModel>,
    scroll: (f64, f64),
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Option<Node>>,
    body: ElementId,
    viewport_width: f64,
    viewport_height: f64,
}

impl MemoryDocument {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let body = Node {
            tag: "BODY".to_string(),
            ..Node::default()
        };
        MemoryDocument {
            nodes: vec![Some(body)],
            body: ElementId::from_raw(0),
            viewport_width,
            viewport_height,
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Create an element and append it to `parent`
    pub fn element(&mut self, tag: &str, parent: ElementId) -> ElementId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Give the element an explicit box, relative to its parent
    pub fn set_box(&mut self, id: ElementId, x: f64, y: f64, width: f64, height: f64) {
        if let Some(node) = self.node_mut(id) {
            node.layout = Some(BoxModel {
                x,
                y,
                width,
                height,
            });
        }
    }

    pub fn set_scroll(&mut self, id: ElementId, left: f64, top: f64) {
        if let Some(node) = self.node_mut(id) {
            node.scroll = (left, top);
        }
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Inline styles rendered as `prop:value;` in insertion order
    pub fn style_string(&self, id: ElementId) -> String {
        self.node(id)
            .map(|node| {
                node.styles
                    .iter()
                    .map(|(prop, value)| format!("{prop}:{value};"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Visible text of the node and its descendants, one entry per line
    pub fn text_lines(&self, id: ElementId) -> Vec<String> {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text.lines().map(str::to_string).collect()
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.inner_html.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&html_to_text(&node.inner_html));
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.raw() as usize).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.raw() as usize).and_then(Option::as_mut)
    }

    fn measured(&self, id: ElementId) -> (f64, f64) {
        let lines = self.text_lines(id);
        let width = lines.iter().map(|line| line.width()).max().unwrap_or(0) as f64;
        (width + BORDER * 2.0, lines.len() as f64 + BORDER * 2.0)
    }
}

impl Document for MemoryDocument {
    fn body(&self) -> ElementId {
        self.body
    }

    fn contains(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == self.body {
                return true;
            }
            current = self.node(node_id).and_then(|node| node.parent);
        }
        false
    }

    fn tag_name(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.tag.as_str())
    }

    fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.node(id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn offset_parent(&self, id: ElementId) -> Option<ElementId> {
        if id == self.body || !self.is_attached(id) {
            return None;
        }
        self.parent(id)
    }

    fn offset_left(&self, id: ElementId) -> f64 {
        self.node(id)
            .and_then(|node| node.layout)
            .map_or(0.0, |layout| layout.x)
    }

    fn offset_top(&self, id: ElementId) -> f64 {
        self.node(id)
            .and_then(|node| node.layout)
            .map_or(0.0, |layout| layout.y)
    }

    fn scroll_left(&self, id: ElementId) -> f64 {
        self.node(id).map_or(0.0, |node| node.scroll.0)
    }

    fn scroll_top(&self, id: ElementId) -> f64 {
        self.node(id).map_or(0.0, |node| node.scroll.1)
    }

    fn outer_width(&self, id: ElementId) -> f64 {
        match self.node(id).and_then(|node| node.layout) {
            Some(layout) => layout.width,
            None => self.measured(id).0,
        }
    }

    fn outer_height(&self, id: ElementId) -> f64 {
        match self.node(id).and_then(|node| node.layout) {
            Some(layout) => layout.height,
            None => self.measured(id).1,
        }
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId::from_raw(self.nodes.len() as u64);
        self.nodes.push(Some(Node {
            tag: tag.to_ascii_uppercase(),
            ..Node::default()
        }));
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            if let Some(node) = self.node_mut(old_parent) {
                node.children.retain(|c| *c != child);
            }
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn remove(&mut self, id: ElementId) {
        if id == self.body || !self.contains(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.node_mut(parent) {
                node.children.retain(|c| *c != id);
            }
        }

        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(node_id.raw() as usize).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
    }

    fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.node(id).and_then(|node| {
            node.styles
                .iter()
                .find(|(prop, _)| prop == property)
                .map(|(_, value)| value.as_str())
        })
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        match node.styles.iter_mut().find(|(prop, _)| prop == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node
                .styles
                .push((property.to_string(), value.to_string())),
        }
    }

    fn inner_html(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.inner_html.as_str())
    }

    fn set_inner_html(&mut self, id: ElementId, html: &str) {
        if let Some(node) = self.node_mut(id) {
            node.inner_html = html.to_string();
        }
    }
}

/// Strip markup, turning `<br>` into line breaks and decoding the basic entities
fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            rest = &rest[start..];
            break;
        };
        let tag = rest[start + 1..start + end].trim().to_ascii_lowercase();
        if tag == "br" || tag == "br/" || tag == "br /" {
            text.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    text.push_str(rest);

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "html_text_tests.rs"]
mod html_text_tests;
