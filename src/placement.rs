//! Tip placement
//!
//! Pure geometry: given where the trigger is, how big the tip is and how the
//! tooltip is configured, work out where the tip goes. Element alignment is
//! decided per axis by the sign of the offset component, cursor alignment is
//! a plain translation. Either way a tip that would run past the right edge
//! of the viewport is anchored from the right instead.

use crate::config::{AlignTo, Offset};
use crate::dom::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    /// Trigger position in document coordinates
    pub trigger_origin: Point,
    pub trigger_size: Size,
    pub tip_size: Size,
    pub align_to: AlignTo,
    pub offset: Offset,
    /// Page coordinates of the pointer, when the show came from a pointer event
    pub pointer: Option<Point>,
    pub viewport_width: f64,
}

/// Horizontal anchoring of the tip; `left` and `right` are never both set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    Left(f64),
    Right(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipPosition {
    pub top: f64,
    pub horizontal: Horizontal,
}

impl TipPosition {
    /// Inline style declarations for the tip container
    pub fn css(&self) -> [(&'static str, String); 3] {
        let top = ("top", px(self.top));
        match self.horizontal {
            Horizontal::Left(left) => [top, ("left", px(left)), ("right", "auto".to_string())],
            Horizontal::Right(right) => [top, ("right", px(right)), ("left", "auto".to_string())],
        }
    }
}

/// Compute where the tip goes
pub fn place(input: &PlacementInput) -> TipPosition {
    let (left, top) = match input.align_to {
        AlignTo::Cursor => {
            let pointer = input.pointer.unwrap_or_default();
            (pointer.x + input.offset.dx, pointer.y + input.offset.dy)
        }
        AlignTo::Element => (
            align_axis(
                input.trigger_origin.x,
                input.trigger_size.width,
                input.tip_size.width,
                input.offset.dx,
            ),
            align_axis(
                input.trigger_origin.y,
                input.trigger_size.height,
                input.tip_size.height,
                input.offset.dy,
            ),
        ),
    };

    let horizontal = if left + input.tip_size.width > input.viewport_width {
        Horizontal::Right(input.viewport_width - left)
    } else {
        Horizontal::Left(left)
    };

    TipPosition { top, horizontal }
}

/// Place the tip along one axis relative to the element
///
/// Negative offsets put the tip before the element, zero centres it, positive
/// offsets put it after. The magnitude is the gap.
pub fn align_axis(position: f64, element_extent: f64, tip_extent: f64, offset: f64) -> f64 {
    if offset < 0.0 {
        position - offset.abs() - tip_extent
    } else if offset == 0.0 {
        position - (tip_extent - element_extent) / 2.0
    } else {
        position + element_extent + offset
    }
}

/// Pixel-suffixed CSS length
pub fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
