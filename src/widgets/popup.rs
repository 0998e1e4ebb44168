use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::dom::{Document, ElementId, document_offset};

/// Parse a pixel length such as `"12px"`; `auto` and garbage give `None`
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Cells covered by an element, clipped to `area`
pub fn element_rect(doc: &dyn Document, element: ElementId, area: Rect) -> Option<Rect> {
    let origin = document_offset(doc, element);
    clip(
        origin.x,
        origin.y,
        doc.outer_width(element),
        doc.outer_height(element),
        area,
    )
}

/// Cells covered by a tip container, from the inline position the tooltip
/// wrote. Returns `None` while the tip is not displayed.
pub fn tip_rect(doc: &dyn Document, tip: ElementId, area: Rect) -> Option<Rect> {
    if doc.style(tip, "display") != Some("block") {
        return None;
    }

    let width = doc.outer_width(tip);
    let height = doc.outer_height(tip);
    let top = doc.style(tip, "top").and_then(parse_px)?;
    let left = match doc.style(tip, "left").and_then(parse_px) {
        Some(left) => left,
        None => {
            let right = doc.style(tip, "right").and_then(parse_px)?;
            doc.viewport_width() - right - width
        }
    };

    clip(left, top, width, height, area)
}

fn clip(x: f64, y: f64, width: f64, height: f64, area: Rect) -> Option<Rect> {
    let x0 = x.floor().max(f64::from(area.x));
    let y0 = y.floor().max(f64::from(area.y));
    let x1 = (x + width).floor().min(f64::from(area.right()));
    let y1 = (y + height).floor().min(f64::from(area.bottom()));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
