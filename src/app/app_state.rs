use std::cell::Cell;
use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::config::{AlignTo, Config, TooltipOptions};
use crate::dom::{Document, ElementId, MemoryDocument};
use crate::error::Result;
use crate::registry::Registry;

const BUTTON_HEIGHT: f64 = 3.0;
const BUTTON_GAP: f64 = 2.0;
const FIRST_BUTTON_X: f64 = 2.0;

/// Class the demo puts on every button that gets the shared tooltip
pub const HOVER_CLASS: &str = "hastip";

/// A clickable, hoverable box in the demo scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub element: ElementId,
    pub label: String,
}

/// Application state
pub struct App {
    pub doc: MemoryDocument,
    pub registry: Registry,
    pub buttons: Vec<Button>,
    /// Element currently under the mouse: a button or a tip container
    pub hovered: Option<ElementId>,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    /// Build the demo scene for a `width` x `height` terminal and bind its
    /// tooltips. `overrides` (from the command line) win over `config`.
    pub fn new(width: u16, height: u16, config: &Config, overrides: &TooltipOptions) -> Result<Self> {
        let mut doc = MemoryDocument::new(f64::from(width), f64::from(height));
        let row = (f64::from(height) / 2.0 - 1.0).max(1.0).floor();

        let scene: [(&str, &str, &str, &str); 5] = [
            ("button", "save", "Save", "Write the buffer to disk"),
            ("button", "open", "Open", "Open a file<br>Ctrl+O"),
            ("button", "delete", "Delete", "Remove the selection"),
            ("a", "help", "Help", "Show key bindings"),
            ("button", "stats", "Stats", "Usage counter"),
        ];

        let body = doc.body();
        let mut x = FIRST_BUTTON_X;
        let mut buttons = Vec::with_capacity(scene.len());
        for (tag, id, label, title) in scene {
            let element = doc.element(tag, body);
            let width = label.width() as f64 + 4.0;
            doc.set_box(element, x, row, width, BUTTON_HEIGHT);
            doc.set_attribute(element, "id", id);
            doc.set_attribute(element, "title", title);
            if tag == "button" && id != "stats" {
                doc.add_class(element, HOVER_CLASS);
            }
            buttons.push(Button {
                element,
                label: label.to_string(),
            });
            x += width + BUTTON_GAP;
        }

        let mut registry = Registry::new();
        let shared = overrides.merged_over(&config.tooltip);
        registry.bind_selector(&mut doc, &format!(".{HOVER_CLASS}"), &shared)?;

        for help in doc.select("a#help") {
            let options = TooltipOptions::new()
                .content("Click again to close<br>q or Esc quits")
                .show_event("click")
                .hide_event("click")
                .merged_over(&shared);
            registry.bind(&mut doc, help, &options)?;
        }

        let shows = Rc::new(Cell::new(0u32));
        for stats in doc.select("button#stats") {
            let shows = Rc::clone(&shows);
            let options = TooltipOptions::new()
                .align_to(AlignTo::Cursor)
                .content_fn(move |request| {
                    shows.set(shows.get() + 1);
                    let id = request.document.attribute(request.trigger, "id").unwrap_or_default();
                    Ok(format!("#{id} rendered {} time(s)", shows.get()))
                })
                .merged_over(&shared);
            registry.bind(&mut doc, stats, &options)?;
        }

        for rule in &config.bind {
            let options = overrides.merged_over(&config.options_for(rule));
            registry.bind_selector(&mut doc, &rule.selector, &options)?;
        }

        Ok(App {
            doc,
            registry,
            buttons,
            hovered: None,
            status: String::from("Hover a button, click Help, q to quit"),
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn button(&self, element: ElementId) -> Option<&Button> {
        self.buttons.iter().find(|button| button.element == element)
    }

    /// Tip containers currently on screen, with the trigger they belong to
    pub fn visible_tips(&self) -> Vec<(ElementId, ElementId)> {
        self.registry
            .widgets()
            .filter_map(|widget| widget.tip().map(|tip| (widget.trigger(), tip)))
            .filter(|(_, tip)| self.doc.style(*tip, "display") == Some("block"))
            .collect()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
