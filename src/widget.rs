//! Tooltip widget
//!
//! One [`TooltipWidget`] per bound trigger element. The widget owns a
//! floating tip node appended to the body, created on first use, and drives
//! it from the events the host delivers through [`TooltipWidget::handle`].
//!
//! Show and hide are both effect callbacks. Before either runs, any fade
//! still in flight on the tip is stopped, so effects never queue.

mod render;

use std::time::Instant;

use crate::animation::Animator;
use crate::config::{Settings, TooltipOptions};
use crate::dom::{Document, ElementId};
use crate::error::{Result, TipsyError};
use crate::event::{Dispatch, EventKind, PointerEvent};
use crate::placement::Size;
use crate::timer::DelayTimer;

/// Click-toggle state; also tracks the shown state for hover tooltips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Live,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TipNodes {
    container: ElementId,
    content: ElementId,
}

pub struct TooltipWidget {
    trigger: ElementId,
    original_title: String,
    tip_id: String,
    settings: Settings,
    nodes: Option<TipNodes>,
    /// Size has been measured for the current show cycle
    measured: bool,
    /// Computed content was rendered at bind and not yet shown
    prefetched: bool,
    cached_size: Size,
    timer: DelayTimer,
    animator: Animator,
    toggle: ToggleState,
    /// Pointer went from the trigger onto the tip; hide when it leaves the tip
    tip_leave_armed: bool,
    lifecycle: Lifecycle,
}

impl TooltipWidget {
    /// Bind a tooltip to `trigger`.
    ///
    /// Takes over the trigger's `title` (blanking it so the host does not show
    /// its own tooltip). Nothing is rendered yet unless the content is
    /// computed, in which case the tip is built straight away so the provider
    /// runs once up front.
    pub fn bind(
        doc: &mut dyn Document,
        trigger: ElementId,
        options: &TooltipOptions,
        tip_id: impl Into<String>,
    ) -> Result<Self> {
        if !doc.contains(trigger) {
            return Err(TipsyError::ElementNotFound(trigger));
        }
        if !doc.is_attached(trigger) {
            return Err(TipsyError::Detached(trigger));
        }

        let original_title = doc.attribute(trigger, "title").unwrap_or_default().to_string();
        doc.set_attribute(trigger, "title", "");

        let mut widget = TooltipWidget {
            trigger,
            original_title,
            tip_id: tip_id.into(),
            settings: Settings::resolve(options),
            nodes: None,
            measured: false,
            prefetched: false,
            cached_size: Size::default(),
            timer: DelayTimer::default(),
            animator: Animator::default(),
            toggle: ToggleState::Hidden,
            tip_leave_armed: false,
            lifecycle: Lifecycle::Live,
        };

        if widget.settings.content.is_computed() {
            widget.ensure_ready(doc);
            if let Err(e) = widget.render_content(doc) {
                widget.destroy(doc);
                return Err(e);
            }
            widget.prefetched = true;
        }

        log::debug!("Bound tooltip {} to {}", widget.tip_id, trigger);
        Ok(widget)
    }

    /// Route a host event aimed at the trigger or the tip
    pub fn handle(
        &mut self,
        doc: &mut dyn Document,
        event: &PointerEvent,
        now: Instant,
    ) -> Result<Dispatch> {
        self.ensure_live()?;

        if self.owns_node(event.target) {
            self.handle_tip_event(doc, event, now)?;
            return Ok(Dispatch::default());
        }
        if event.target != self.trigger {
            return Ok(Dispatch::default());
        }

        if self.settings.toggles_on_click() && event.kind == EventKind::Click {
            self.toggle_on_click(doc, event, now)?;
            return Ok(Dispatch {
                prevent_default: doc.tag_name(self.trigger) == Some("A"),
            });
        }

        if event.kind == self.settings.show_event {
            self.start_show(doc, event, now)?;
        } else if event.kind == self.settings.hide_event {
            if self.timer.cancel() {
                log::debug!("Cancelled delayed show of {}", self.tip_id);
            }
            self.hide(doc, Some(event), now)?;
        }
        Ok(Dispatch::default())
    }

    /// Fire a due delayed show and advance the running fade.
    ///
    /// Returns true when something visible changed.
    pub fn tick(&mut self, doc: &mut dyn Document, now: Instant) -> Result<bool> {
        if self.lifecycle == Lifecycle::Destroyed {
            return Ok(false);
        }

        let mut changed = false;
        if let Some(event) = self.timer.fire(now) {
            self.show(doc, event.as_ref(), now)?;
            changed = true;
        }
        if let Some(nodes) = self.nodes {
            if self.animator.tick(now) {
                self.animator.apply(doc, nodes.container);
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Remove the tip node and give the trigger its title back.
    ///
    /// Calling it again does nothing.
    pub fn destroy(&mut self, doc: &mut dyn Document) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }

        self.timer.cancel();
        if let Some(nodes) = self.nodes.take() {
            doc.remove(nodes.container);
        }
        if doc.contains(self.trigger) {
            doc.set_attribute(self.trigger, "title", &self.original_title);
        }
        self.lifecycle = Lifecycle::Destroyed;
        log::debug!("Destroyed tooltip {}", self.tip_id);
    }

    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    /// The floating container, once created
    pub fn tip(&self) -> Option<ElementId> {
        self.nodes.map(|nodes| nodes.container)
    }

    /// The node holding the rendered content, once created
    pub fn tip_content(&self) -> Option<ElementId> {
        self.nodes.map(|nodes| nodes.content)
    }

    pub fn tip_id(&self) -> &str {
        &self.tip_id
    }

    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_initialized(&self) -> bool {
        self.nodes.is_some()
    }

    pub fn is_shown(&self) -> bool {
        self.toggle == ToggleState::Shown
    }

    pub fn is_show_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    pub fn cached_size(&self) -> Size {
        self.cached_size
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// True for the tip container and its content node
    pub fn owns_node(&self, id: ElementId) -> bool {
        self.nodes
            .is_some_and(|nodes| nodes.container == id || nodes.content == id)
    }

    fn ensure_live(&self) -> Result<()> {
        if self.lifecycle == Lifecycle::Destroyed {
            return Err(TipsyError::Destroyed(self.trigger));
        }
        Ok(())
    }

    fn start_show(&mut self, doc: &mut dyn Document, event: &PointerEvent, now: Instant) -> Result<()> {
        if self.settings.delay > 0 {
            self.timer
                .arm(now, self.settings.delay_duration(), Some(event.clone()));
            log::debug!("Delaying {} by {}ms", self.tip_id, self.settings.delay);
            return Ok(());
        }
        self.show(doc, Some(event), now)
    }

    fn toggle_on_click(&mut self, doc: &mut dyn Document, event: &PointerEvent, now: Instant) -> Result<()> {
        if self.timer.cancel() {
            log::debug!("Click cancelled delayed show of {}", self.tip_id);
            return Ok(());
        }
        match self.toggle {
            ToggleState::Hidden => self.start_show(doc, event, now),
            ToggleState::Shown => self.hide(doc, Some(event), now),
        }
    }

    fn handle_tip_event(&mut self, doc: &mut dyn Document, event: &PointerEvent, now: Instant) -> Result<()> {
        if event.kind != EventKind::MouseLeave || !self.tip_leave_armed {
            return Ok(());
        }

        self.tip_leave_armed = false;
        if event.related_target == Some(self.trigger) {
            return Ok(());
        }
        self.hide(doc, Some(event), now)
    }
}


#[cfg(test)]
#[path = "widget/toggle_tests.rs"]
mod toggle_tests;
