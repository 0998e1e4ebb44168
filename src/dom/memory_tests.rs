//! Tests for MemoryDocument

use super::*;

fn doc() -> MemoryDocument {
    MemoryDocument::new(120.0, 40.0)
}

#[test]
fn test_body_is_attached_and_upper_case() {
    let doc = doc();
    assert!(doc.is_attached(doc.body()));
    assert_eq!(doc.tag_name(doc.body()), Some("BODY"));
}

#[test]
fn test_created_element_is_detached_until_appended() {
    let mut doc = doc();
    let el = doc.create_element("div");
    assert!(doc.contains(el));
    assert!(!doc.is_attached(el));

    let body = doc.body();
    doc.append_child(body, el);
    assert!(doc.is_attached(el));
    assert_eq!(doc.tag_name(el), Some("DIV"));
}

#[test]
fn test_remove_drops_subtree() {
    let mut doc = doc();
    let body = doc.body();
    let outer = doc.element("div", body);
    let inner = doc.element("span", outer);

    doc.remove(outer);

    assert!(!doc.contains(outer));
    assert!(!doc.contains(inner));
    assert!(doc.children(body).is_empty());
}

#[test]
fn test_remove_twice_is_harmless() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("div", body);
    doc.remove(el);
    doc.remove(el);
    assert!(!doc.contains(el));
}

#[test]
fn test_set_style_replaces_in_place() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("div", body);
    doc.set_style(el, "top", "1px");
    doc.set_style(el, "left", "2px");
    doc.set_style(el, "top", "3px");

    assert_eq!(doc.style(el, "top"), Some("3px"));
    assert_eq!(doc.style_string(el), "top:3px;left:2px;");
}

#[test]
fn test_attributes_round_trip_and_blank() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("a", body);
    doc.set_attribute(el, "title", "Open");
    assert_eq!(doc.attribute(el, "title"), Some("Open"));

    doc.set_attribute(el, "title", "");
    assert_eq!(doc.attribute(el, "title"), Some(""));
}

#[test]
fn test_add_class_does_not_duplicate() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("div", body);
    doc.add_class(el, "tipsy");
    doc.add_class(el, "dark");
    doc.add_class(el, "tipsy");

    assert_eq!(doc.attribute(el, "class"), Some("tipsy dark"));
    assert!(doc.has_class(el, "dark"));
    assert!(!doc.has_class(el, "tip"));
}

#[test]
fn test_explicit_box_wins_over_measurement() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("div", body);
    doc.set_inner_html(el, "a much longer label than the box");
    doc.set_box(el, 0.0, 0.0, 10.0, 3.0);

    assert_eq!(doc.outer_width(el), 10.0);
    assert_eq!(doc.outer_height(el), 3.0);
}

#[test]
fn test_measurement_uses_descendant_text_and_border() {
    let mut doc = doc();
    let body = doc.body();
    let container = doc.element("div", body);
    let content = doc.element("div", container);
    doc.set_inner_html(content, "Save<br>Ctrl+S to save now");

    assert_eq!(doc.outer_width(container), 20.0);
    assert_eq!(doc.outer_height(container), 4.0);
}

#[test]
fn test_measurement_counts_wide_characters() {
    let mut doc = doc();
    let body = doc.body();
    let el = doc.element("div", body);
    doc.set_inner_html(el, "保存");

    assert_eq!(doc.outer_width(el), 6.0);
}

#[test]
fn test_writes_to_missing_nodes_are_ignored() {
    let mut doc = doc();
    let ghost = ElementId::from_raw(99);
    doc.set_style(ghost, "top", "1px");
    doc.set_attribute(ghost, "title", "x");

    assert!(doc.style(ghost, "top").is_none());
    assert!(doc.attribute(ghost, "title").is_none());
}

#[test]
fn test_offset_parent_of_detached_is_none() {
    let mut doc = doc();
    let el = doc.create_element("div");
    assert!(doc.offset_parent(el).is_none());
    assert!(doc.offset_parent(doc.body()).is_none());
}
