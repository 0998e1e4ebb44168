use std::time::Instant;

use super::{TipNodes, ToggleState, TooltipWidget};
use crate::animation::TipHandle;
use crate::config::{Content, ContentRequest};
use crate::dom::{Document, document_offset};
use crate::error::{Result, TipsyError};
use crate::event::PointerEvent;
use crate::placement::{PlacementInput, Size, place};

/// Stacking order of the tip container; above anything the host draws
pub const TIP_Z_INDEX: &str = "2147483647";

impl TooltipWidget {
    /// Show the tip, positioned for `event` (or for no pointer at all when
    /// called programmatically).
    ///
    /// The first show of a cycle renders the content, applies the css
    /// overrides and measures the tip. Repeated shows inside the same cycle
    /// only reposition.
    pub fn show(&mut self, doc: &mut dyn Document, event: Option<&PointerEvent>, now: Instant) -> Result<()> {
        self.ensure_live()?;
        let nodes = self.ensure_ready(doc);

        if !self.measured {
            if !std::mem::take(&mut self.prefetched) {
                self.render_content(doc)?;
            }
            for (property, value) in &self.settings.css {
                doc.set_style(nodes.content, property, value);
            }
            self.cached_size = Size::new(
                doc.outer_width(nodes.container),
                doc.outer_height(nodes.container),
            );
            self.measured = true;
        }

        let input = PlacementInput {
            trigger_origin: document_offset(doc, self.trigger),
            trigger_size: Size::new(doc.outer_width(self.trigger), doc.outer_height(self.trigger)),
            tip_size: self.cached_size,
            align_to: self.settings.align_to,
            offset: self.settings.offset,
            pointer: event.map(PointerEvent::page),
            viewport_width: doc.viewport_width(),
        };
        for (property, value) in place(&input).css() {
            doc.set_style(nodes.container, property, &value);
        }

        self.animator.stop();
        let effect = self.settings.show.clone();
        let mut handle = TipHandle::new(doc, nodes.container, &mut self.animator, now);
        effect(event, &mut handle);

        self.toggle = ToggleState::Shown;
        log::debug!("Showing {}", self.tip_id);
        Ok(())
    }

    /// Hide the tip.
    ///
    /// Does nothing if the tip was never built. When the pointer left the
    /// trigger for the tip itself, hiding waits until it leaves the tip for
    /// somewhere other than the trigger.
    pub fn hide(&mut self, doc: &mut dyn Document, event: Option<&PointerEvent>, now: Instant) -> Result<()> {
        self.ensure_live()?;
        let Some(nodes) = self.nodes else {
            return Ok(());
        };

        if event
            .and_then(|event| event.related_target)
            .is_some_and(|related| self.owns_node(related))
        {
            self.tip_leave_armed = true;
            return Ok(());
        }

        self.tip_leave_armed = false;
        self.animator.stop();
        let effect = self.settings.hide.clone();
        let mut handle = TipHandle::new(doc, nodes.container, &mut self.animator, now);
        effect(event, &mut handle);

        self.measured = false;
        self.toggle = ToggleState::Hidden;
        log::debug!("Hiding {}", self.tip_id);
        Ok(())
    }

    /// Build the tip nodes on first use
    pub(super) fn ensure_ready(&mut self, doc: &mut dyn Document) -> TipNodes {
        if let Some(nodes) = self.nodes {
            return nodes;
        }

        let container = doc.create_element("div");
        doc.set_attribute(container, "id", &self.tip_id);
        doc.set_style(container, "position", "absolute");
        doc.set_style(container, "z-index", TIP_Z_INDEX);
        doc.set_style(container, "display", "none");
        let body = doc.body();
        doc.append_child(body, container);

        let content = doc.create_element("div");
        doc.add_class(content, &self.settings.class_name);
        doc.append_child(container, content);

        let nodes = TipNodes { container, content };
        self.nodes = Some(nodes);
        nodes
    }

    /// Write the tip's HTML: literal content, else the provider's output,
    /// else the title the trigger had when it was bound
    pub(super) fn render_content(&mut self, doc: &mut dyn Document) -> Result<()> {
        let nodes = self.ensure_ready(doc);

        let html = match &self.settings.content {
            Content::Literal(html) if !html.is_empty() => html.clone(),
            Content::Literal(_) => self.original_title.clone(),
            Content::Computed(provider) => {
                let request = ContentRequest {
                    trigger: self.trigger,
                    tip: nodes.content,
                    document: &*doc,
                };
                match provider(&request) {
                    Ok(html) if html.is_empty() => self.original_title.clone(),
                    Ok(html) => html,
                    Err(e) => {
                        log::warn!("Content provider for {} failed: {}", self.tip_id, e);
                        return Err(TipsyError::Content(e));
                    }
                }
            }
        };

        doc.set_inner_html(nodes.content, &html);
        Ok(())
    }
}
