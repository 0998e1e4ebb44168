//! Element to tooltip association
//!
//! The registry owns every bound [`TooltipWidget`], finds them again by
//! trigger element for programmatic `show`/`hide`/`destroy`, and routes host
//! events to the widget whose trigger or tip the event hit.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::config::TooltipOptions;
use crate::dom::{Document, ElementId};
use crate::error::{Result, TipsyError};
use crate::event::{Dispatch, PointerEvent};
use crate::widget::TooltipWidget;

static NEXT_TIP_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identifier for a tip container
pub fn next_tip_id() -> String {
    format!("tipsy-{}", NEXT_TIP_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

#[derive(Default)]
pub struct Registry {
    widgets: BTreeMap<WidgetId, TooltipWidget>,
    by_trigger: HashMap<ElementId, Vec<WidgetId>>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Bind a tooltip to `trigger`.
    ///
    /// Binding an element that already has a tooltip adds a second,
    /// independent one; check [`Registry::instance`] first to avoid that.
    pub fn bind(
        &mut self,
        doc: &mut dyn Document,
        trigger: ElementId,
        options: &TooltipOptions,
    ) -> Result<WidgetId> {
        let widget = TooltipWidget::bind(doc, trigger, options, next_tip_id())?;
        let id = WidgetId(self.next_id);
        self.next_id += 1;

        self.widgets.insert(id, widget);
        self.by_trigger.entry(trigger).or_default().push(id);
        Ok(id)
    }

    /// Bind every element matching `selector`; returns how many were bound.
    ///
    /// All or nothing: if one match fails to bind, the ones bound before it
    /// are torn down again.
    pub fn bind_selector(
        &mut self,
        doc: &mut dyn Document,
        selector: &str,
        options: &TooltipOptions,
    ) -> Result<usize> {
        let targets = doc.select(selector);
        let mut bound = Vec::with_capacity(targets.len());
        for trigger in &targets {
            match self.bind(doc, *trigger, options) {
                Ok(id) => bound.push((*trigger, id)),
                Err(e) => {
                    for (trigger, id) in bound {
                        self.unbind(doc, trigger, id);
                    }
                    return Err(e);
                }
            }
        }
        log::debug!("Bound {} element(s) for '{}'", targets.len(), selector);
        Ok(targets.len())
    }

    /// Most recently bound tooltip of `trigger`
    pub fn instance(&self, trigger: ElementId) -> Option<&TooltipWidget> {
        let id = self.latest(trigger)?;
        self.widgets.get(&id)
    }

    pub fn instance_mut(&mut self, trigger: ElementId) -> Option<&mut TooltipWidget> {
        let id = self.latest(trigger)?;
        self.widgets.get_mut(&id)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&TooltipWidget> {
        self.widgets.get(&id)
    }

    pub fn widgets(&self) -> impl Iterator<Item = &TooltipWidget> {
        self.widgets.values()
    }

    pub fn show(&mut self, doc: &mut dyn Document, trigger: ElementId, now: Instant) -> Result<()> {
        self.instance_mut(trigger)
            .ok_or(TipsyError::NotBound(trigger))?
            .show(doc, None, now)
    }

    pub fn hide(&mut self, doc: &mut dyn Document, trigger: ElementId, now: Instant) -> Result<()> {
        self.instance_mut(trigger)
            .ok_or(TipsyError::NotBound(trigger))?
            .hide(doc, None, now)
    }

    /// Tear down every tooltip bound to `trigger`.
    ///
    /// Destroying an element with nothing bound is a no-op.
    pub fn destroy(&mut self, doc: &mut dyn Document, trigger: ElementId) {
        let Some(ids) = self.by_trigger.remove(&trigger) else {
            return;
        };
        for id in ids {
            if let Some(mut widget) = self.widgets.remove(&id) {
                widget.destroy(doc);
            }
        }
    }

    /// Deliver a host event to the tooltips it concerns
    pub fn dispatch(
        &mut self,
        doc: &mut dyn Document,
        event: &PointerEvent,
        now: Instant,
    ) -> Result<Dispatch> {
        let mut dispatch = Dispatch::default();
        let mut first_error = None;
        for widget in self.widgets.values_mut() {
            if widget.trigger() != event.target && !widget.owns_node(event.target) {
                continue;
            }
            match widget.handle(doc, event, now) {
                Ok(handled) => dispatch = dispatch.merge(handled),
                Err(e) => {
                    log::warn!("{} failed to handle {}: {}", widget.tip_id(), event.kind, e);
                    first_error.get_or_insert(e);
                }
            }
        }
        first_error.map_or(Ok(dispatch), Err)
    }

    /// Advance timers and fades; returns true if anything visible changed
    pub fn tick(&mut self, doc: &mut dyn Document, now: Instant) -> Result<bool> {
        let mut changed = false;
        let mut first_error = None;
        for widget in self.widgets.values_mut() {
            match widget.tick(doc, now) {
                Ok(ticked) => changed |= ticked,
                Err(e) => {
                    log::warn!("{} failed to tick: {}", widget.tip_id(), e);
                    first_error.get_or_insert(e);
                }
            }
        }
        first_error.map_or(Ok(changed), Err)
    }

    fn unbind(&mut self, doc: &mut dyn Document, trigger: ElementId, id: WidgetId) {
        if let Some(mut widget) = self.widgets.remove(&id) {
            widget.destroy(doc);
        }
        if let Some(ids) = self.by_trigger.get_mut(&trigger) {
            ids.retain(|bound| *bound != id);
            if ids.is_empty() {
                self.by_trigger.remove(&trigger);
            }
        }
    }

    fn latest(&self, trigger: ElementId) -> Option<WidgetId> {
        self.by_trigger.get(&trigger)?.last().copied()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
