//! tipsy: a tooltip widget
//!
//! Bind a tooltip to an element and it will float a tip next to that
//! element (or next to the pointer) when the element is hovered or clicked.
//! The host supplies the document through [`dom::Document`] and forwards
//! pointer events and clock ticks to a [`registry::Registry`].

pub mod animation;
pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod placement;
pub mod registry;
pub mod timer;
pub mod widget;
pub mod widgets;


pub use config::{AlignTo, Content, Offset, Settings, TooltipOptions};
pub use dom::{Document, ElementId, MemoryDocument};
pub use error::{Result, TipsyError};
pub use event::{Dispatch, EventKind, PointerEvent};
pub use registry::{Registry, WidgetId};
pub use widget::TooltipWidget;
