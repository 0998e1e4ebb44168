use super::{Document, ElementId};

/// Position in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Document-relative offset of `el`
///
/// Walks the offset-parent chain, accumulating `offset - scroll` at every
/// step except the body. An element without an offset parent (the body
/// itself, or anything detached) reports the origin.
pub fn document_offset<D: Document + ?Sized>(doc: &D, el: ElementId) -> Point {
    let mut point = Point::default();
    if doc.offset_parent(el).is_none() {
        return point;
    }

    let mut current = Some(el);
    while let Some(node) = current {
        if doc.tag_name(node) != Some("BODY") {
            point.x += doc.offset_left(node) - doc.scroll_left(node);
            point.y += doc.offset_top(node) - doc.scroll_top(node);
        }
        current = doc.offset_parent(node);
    }
    point
}
