//! Tests for click-toggled tooltips

use super::*;
use crate::dom::MemoryDocument;
use crate::test_utils::test_helpers::{Clock, click, enter, leave, test_document};

fn click_toggle() -> TooltipOptions {
    TooltipOptions::new()
        .show_event("click")
        .hide_event("click")
        .delay(0u64)
}

#[test]
fn test_click_toggles_between_shown_and_hidden() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &click_toggle(), "t").unwrap();

    widget.handle(&mut doc, &click(trigger), clock.at(0)).unwrap();
    assert!(widget.is_shown());

    widget.handle(&mut doc, &click(trigger), clock.at(10)).unwrap();
    assert!(!widget.is_shown());

    widget.handle(&mut doc, &click(trigger), clock.at(20)).unwrap();
    assert!(widget.is_shown());
}

#[test]
fn test_click_on_anchor_prevents_navigation() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &click_toggle(), "t").unwrap();

    let dispatch = widget.handle(&mut doc, &click(trigger), clock.at(0)).unwrap();
    assert!(dispatch.prevent_default);
}

#[test]
fn test_click_on_button_keeps_default_action() {
    let clock = Clock::new();
    let mut doc = MemoryDocument::new(200.0, 100.0);
    let body = doc.body();
    let button = doc.element("button", body);
    doc.set_box(button, 10.0, 10.0, 8.0, 1.0);
    let mut widget = TooltipWidget::bind(&mut doc, button, &click_toggle(), "t").unwrap();

    let dispatch = widget.handle(&mut doc, &click(button), clock.at(0)).unwrap();
    assert!(!dispatch.prevent_default);
    assert!(widget.is_shown());
}

#[test]
fn test_hover_events_ignored_when_click_toggled() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &click_toggle(), "t").unwrap();

    widget.handle(&mut doc, &enter(trigger), clock.at(0)).unwrap();
    assert!(!widget.is_initialized());

    widget.handle(&mut doc, &click(trigger), clock.at(5)).unwrap();
    widget.handle(&mut doc, &leave(trigger), clock.at(10)).unwrap();
    assert!(widget.is_shown());
}

#[test]
fn test_delayed_click_show_can_be_cancelled_by_second_click() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let options = click_toggle().delay(100u64);
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &options, "t").unwrap();

    widget.handle(&mut doc, &click(trigger), clock.at(0)).unwrap();
    assert!(widget.is_show_pending());

    widget.handle(&mut doc, &click(trigger), clock.at(50)).unwrap();
    assert!(!widget.is_show_pending());

    widget.tick(&mut doc, clock.at(500)).unwrap();
    assert!(!widget.is_shown());
}

#[test]
fn test_delayed_click_show_fires_on_tick() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let options = click_toggle().delay(100u64);
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &options, "t").unwrap();

    widget.handle(&mut doc, &click(trigger), clock.at(0)).unwrap();
    widget.tick(&mut doc, clock.at(100)).unwrap();
    assert!(widget.is_shown());

    widget.handle(&mut doc, &click(trigger), clock.at(150)).unwrap();
    assert!(!widget.is_shown());
}

#[test]
fn test_mixed_click_show_uses_hover_hide() {
    let clock = Clock::new();
    let (mut doc, trigger) = test_document();
    let options = TooltipOptions::new().show_event("click").delay(0u64);
    let mut widget = TooltipWidget::bind(&mut doc, trigger, &options, "t").unwrap();

    widget.handle(&mut doc, &click(trigger), clock.at(0)).unwrap();
    assert!(widget.is_shown());
    widget.handle(&mut doc, &leave(trigger), clock.at(10)).unwrap();
    assert!(!widget.is_shown());
}
