//! Host events delivered to tooltips

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::dom::{ElementId, Point};

/// DOM event name a tooltip can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    MouseEnter,
    MouseLeave,
    Click,
    Other(String),
}

impl EventKind {
    pub fn name(&self) -> &str {
        match self {
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::Click => "click",
            EventKind::Other(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mouseenter" => EventKind::MouseEnter,
            "mouseleave" => EventKind::MouseLeave,
            "click" => EventKind::Click,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(name: String) -> Self {
        EventKind::from(name.as_str())
    }
}

impl FromStr for EventKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventKind::from(s))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pointer event as seen by a tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub target: ElementId,
    /// Element the pointer moved to (leave) or came from (enter)
    pub related_target: Option<ElementId>,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        PointerEvent {
            kind,
            target,
            related_target: None,
            page_x: 0.0,
            page_y: 0.0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.page_x = x;
        self.page_y = y;
        self
    }

    pub fn related(mut self, related: ElementId) -> Self {
        self.related_target = Some(related);
        self
    }

    pub fn page(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }
}

/// What the host should do with the event after the tooltips saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub prevent_default: bool,
}

impl Dispatch {
    pub fn merge(self, other: Dispatch) -> Dispatch {
        Dispatch {
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
