use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_hover::{element_at, handle_hover};
use crate::error::Result;
use crate::event::{EventKind, PointerEvent};

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
                Ok(())
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Resize(width, height) => {
                self.doc.set_viewport(f64::from(width), f64::from(height));
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Fire due delayed shows and advance fades
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        self.registry.tick(&mut self.doc, now)
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                handle_hover(self, mouse.column, mouse.row, now)
            }
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, now),
            _ => Ok(()),
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) -> Result<()> {
        let Some(target) = element_at(self, column, row) else {
            return Ok(());
        };

        let event = PointerEvent::new(EventKind::Click, target).at(f64::from(column), f64::from(row));
        let dispatch = self.registry.dispatch(&mut self.doc, &event, now)?;

        if let Some(label) = self.button(target).map(|button| button.label.clone()) {
            self.status = if dispatch.prevent_default {
                format!("Clicked {label} (link not followed)")
            } else {
                format!("Clicked {label}")
            };
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
