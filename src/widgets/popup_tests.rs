//! Tests for widgets/popup

use super::*;
use crate::dom::MemoryDocument;

fn area() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

#[test]
fn test_parse_px() {
    assert_eq!(parse_px("12px"), Some(12.0));
    assert_eq!(parse_px("-2.5px"), Some(-2.5));
    assert_eq!(parse_px("auto"), None);
    assert_eq!(parse_px("12"), None);
}

#[test]
fn test_element_rect_from_document_offset() {
    let mut doc = MemoryDocument::new(80.0, 24.0);
    let body = doc.body();
    let button = doc.element("button", body);
    doc.set_box(button, 10.0, 5.0, 8.0, 3.0);

    assert_eq!(element_rect(&doc, button, area()), Some(Rect::new(10, 5, 8, 3)));
}

#[test]
fn test_element_rect_is_clipped_to_area() {
    let mut doc = MemoryDocument::new(80.0, 24.0);
    let body = doc.body();
    let button = doc.element("button", body);
    doc.set_box(button, 76.0, 22.0, 8.0, 3.0);

    assert_eq!(element_rect(&doc, button, area()), Some(Rect::new(76, 22, 4, 2)));
}

#[test]
fn test_tip_rect_hidden_tip_is_none() {
    let mut doc = MemoryDocument::new(80.0, 24.0);
    let body = doc.body();
    let tip = doc.element("div", body);
    doc.set_style(tip, "display", "none");
    doc.set_style(tip, "top", "1px");
    doc.set_style(tip, "left", "1px");

    assert_eq!(tip_rect(&doc, tip, area()), None);
}

#[test]
fn test_tip_rect_left_anchored() {
    let mut doc = MemoryDocument::new(80.0, 24.0);
    let body = doc.body();
    let tip = doc.element("div", body);
    doc.set_inner_html(tip, "Hello");
    doc.set_style(tip, "display", "block");
    doc.set_style(tip, "top", "3px");
    doc.set_style(tip, "left", "10.5px");
    doc.set_style(tip, "right", "auto");

    // 10.5 + 7 = 17.5, floored on both edges
    assert_eq!(tip_rect(&doc, tip, area()), Some(Rect::new(10, 3, 7, 3)));
}

#[test]
fn test_tip_rect_right_anchored() {
    let mut doc = MemoryDocument::new(80.0, 24.0);
    let body = doc.body();
    let tip = doc.element("div", body);
    doc.set_inner_html(tip, "Hello");
    doc.set_style(tip, "display", "block");
    doc.set_style(tip, "top", "0px");
    doc.set_style(tip, "right", "4px");
    doc.set_style(tip, "left", "auto");

    assert_eq!(tip_rect(&doc, tip, area()), Some(Rect::new(69, 0, 7, 3)));
}
