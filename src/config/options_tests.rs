use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.align_to, AlignTo::Element);
    assert_eq!(settings.offset, Offset::new(0.0, -1.0));
    assert!(matches!(settings.content, Content::Literal(ref html) if html.is_empty()));
    assert_eq!(settings.delay, DEFAULT_DELAY_MS);
    assert!(settings.css.is_empty());
    assert_eq!(settings.class_name, "tooltipsy");
    assert_eq!(settings.show_event, EventKind::MouseEnter);
    assert_eq!(settings.hide_event, EventKind::MouseLeave);
    assert!(!settings.toggles_on_click());
}

#[test]
fn test_builder_overrides_defaults() {
    let options = TooltipOptions::new()
        .align_to(AlignTo::Cursor)
        .offset(5.0, 5.0)
        .content("<b>Hi</b>")
        .delay("90")
        .css("color", "red")
        .class_name("hint");

    let settings = Settings::resolve(&options);
    assert_eq!(settings.align_to, AlignTo::Cursor);
    assert_eq!(settings.offset, Offset::new(5.0, 5.0));
    assert_eq!(settings.delay, 90);
    assert_eq!(settings.css.get("color").map(String::as_str), Some("red"));
    assert_eq!(settings.class_name, "hint");
}

#[test]
fn test_toggle_requires_click_on_both_sides() {
    let click_only_show = Settings::resolve(&TooltipOptions::new().show_event("click"));
    assert!(!click_only_show.toggles_on_click());

    let both = Settings::resolve(&TooltipOptions::new().show_event("click").hide_event("click"));
    assert!(both.toggles_on_click());
}

#[test]
fn test_merged_over_prefers_own_fields() {
    let base = TooltipOptions::new().delay(10u64).class_name("base").offset(1.0, 1.0);
    let own = TooltipOptions::new().delay(20u64);

    let merged = own.merged_over(&base);
    let settings = Settings::resolve(&merged);
    assert_eq!(settings.delay, 20);
    assert_eq!(settings.class_name, "base");
    assert_eq!(settings.offset, Offset::new(1.0, 1.0));
}

#[test]
fn test_merged_over_keeps_callbacks() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let base = TooltipOptions::new().on_show(move |_, _| counter.set(counter.get() + 1));

    let merged = TooltipOptions::new().merged_over(&base);
    assert!(merged.show.is_some());
    assert!(merged.hide.is_none());
}

#[test]
fn test_content_fn_is_computed() {
    let options = TooltipOptions::new().content_fn(|_| Ok("dynamic".to_string()));
    let settings = Settings::resolve(&options);
    assert!(settings.content.is_computed());
    assert_eq!(format!("{:?}", settings.content), "Computed(..)");
}

#[test]
fn test_display_lists_resolved_values() {
    let settings = Settings::resolve(&TooltipOptions::new().css("color", "red"));
    let text = settings.to_string();
    assert!(text.contains("align_to = \"element\""));
    assert!(text.contains("offset = [0, -1]"));
    assert!(text.contains("delay = 200"));
    assert!(text.contains("show_event = \"mouseenter\""));
    assert!(text.contains("[css]\ncolor = \"red\""));
}
