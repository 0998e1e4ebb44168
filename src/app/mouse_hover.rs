//! Mouse hover handling
//!
//! The terminal only reports where the mouse is. Enter and leave events are
//! derived here by hit-testing that position against the tips and buttons
//! and comparing with what was under the mouse before.

use std::time::Instant;

use ratatui::layout::{Position, Rect};

use super::app_state::App;
use crate::dom::{Document, ElementId};
use crate::error::Result;
use crate::event::{EventKind, PointerEvent};
use crate::widgets::popup::{element_rect, tip_rect};

/// Topmost element at a cell: tips are drawn over buttons
pub fn element_at(app: &App, column: u16, row: u16) -> Option<ElementId> {
    let area = viewport(app);
    let position = Position::new(column, row);

    let tip = app
        .visible_tips()
        .into_iter()
        .map(|(_, tip)| tip)
        .find(|tip| tip_rect(&app.doc, *tip, area).is_some_and(|rect| rect.contains(position)));
    if tip.is_some() {
        return tip;
    }

    app.buttons
        .iter()
        .map(|button| button.element)
        .find(|element| element_rect(&app.doc, *element, area).is_some_and(|rect| rect.contains(position)))
}

/// Update the hovered element for a mouse move, emitting leave then enter
pub fn handle_hover(app: &mut App, column: u16, row: u16, now: Instant) -> Result<()> {
    let target = element_at(app, column, row);
    if target == app.hovered {
        return Ok(());
    }

    let (x, y) = (f64::from(column), f64::from(row));
    if let Some(previous) = app.hovered {
        let mut event = PointerEvent::new(EventKind::MouseLeave, previous).at(x, y);
        event.related_target = target;
        app.registry.dispatch(&mut app.doc, &event, now)?;
    }
    if let Some(current) = target {
        let mut event = PointerEvent::new(EventKind::MouseEnter, current).at(x, y);
        event.related_target = app.hovered;
        app.registry.dispatch(&mut app.doc, &event, now)?;
    }

    app.hovered = target;
    let label = target
        .and_then(|element| app.button(element))
        .map(|button| button.label.clone());
    app.status = match label {
        Some(label) => format!("Hovering {label}"),
        None if target.is_some() => String::from("Hovering a tip"),
        None => String::new(),
    };
    Ok(())
}

fn viewport(app: &App) -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: app.doc.viewport_width() as u16,
        height: app.doc.viewport_height() as u16,
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
