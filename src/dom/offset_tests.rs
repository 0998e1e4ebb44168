//! Tests for document_offset

use super::*;

#[test]
fn test_direct_child_of_body() {
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let body = doc.body();
    let el = doc.element("a", body);
    doc.set_box(el, 50.0, 50.0, 100.0, 20.0);

    assert_eq!(document_offset(&doc, el), Point::new(50.0, 50.0));
}

#[test]
fn test_nested_offsets_accumulate() {
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let body = doc.body();
    let panel = doc.element("div", body);
    doc.set_box(panel, 10.0, 20.0, 100.0, 50.0);
    let el = doc.element("a", panel);
    doc.set_box(el, 5.0, 7.0, 10.0, 1.0);

    assert_eq!(document_offset(&doc, el), Point::new(15.0, 27.0));
}

#[test]
fn test_scroll_is_subtracted_at_each_level() {
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let body = doc.body();
    let panel = doc.element("div", body);
    doc.set_box(panel, 10.0, 20.0, 100.0, 50.0);
    doc.set_scroll(panel, 0.0, 8.0);
    let el = doc.element("a", panel);
    doc.set_box(el, 5.0, 30.0, 10.0, 1.0);

    assert_eq!(document_offset(&doc, el), Point::new(15.0, 42.0));
}

#[test]
fn test_body_scroll_is_ignored() {
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let body = doc.body();
    doc.set_scroll(body, 30.0, 30.0);
    let el = doc.element("a", body);
    doc.set_box(el, 5.0, 5.0, 10.0, 1.0);

    assert_eq!(document_offset(&doc, el), Point::new(5.0, 5.0));
}

#[test]
fn test_detached_element_reports_origin() {
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let el = doc.create_element("a");
    doc.set_box(el, 5.0, 5.0, 10.0, 1.0);

    assert_eq!(document_offset(&doc, el), Point::default());
}
