//! Tip transitions
//!
//! A tip has at most one transition in flight. Starting a new one first
//! stops the current one and jumps it to its end value, so repeated
//! enter/leave never stacks effects up.

use std::time::{Duration, Instant};

use crate::dom::{Document, ElementId};

/// Duration of the default show and hide fades
pub const DEFAULT_FADE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

/// Opacity of one tip plus the fade currently running on it
#[derive(Debug, Clone, Default)]
pub struct Animator {
    opacity: f64,
    fade: Option<Fade>,
}

impl Animator {
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    /// Opacity the tip will settle at
    pub fn target(&self) -> f64 {
        self.fade.map_or(self.opacity, |fade| fade.to)
    }

    /// Halt the running fade at its end value
    pub fn stop(&mut self) {
        if let Some(fade) = self.fade.take() {
            self.opacity = fade.to;
        }
    }

    pub fn set(&mut self, opacity: f64) {
        self.fade = None;
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn fade_to(&mut self, now: Instant, to: f64, duration: Duration) {
        self.stop();
        let to = to.clamp(0.0, 1.0);
        if duration.is_zero() || self.opacity == to {
            self.opacity = to;
            return;
        }
        self.fade = Some(Fade {
            from: self.opacity,
            to,
            started: now,
            duration,
        });
    }

    /// Advance the running fade; returns true if the opacity changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(fade) = self.fade else {
            return false;
        };

        let elapsed = now.saturating_duration_since(fade.started);
        if elapsed >= fade.duration {
            self.opacity = fade.to;
            self.fade = None;
        } else {
            let progress = elapsed.as_secs_f64() / fade.duration.as_secs_f64();
            self.opacity = fade.from + (fade.to - fade.from) * progress;
        }
        true
    }

    /// Write `opacity` and `display` onto the tip
    pub fn apply(&self, doc: &mut dyn Document, tip: ElementId) {
        let hidden = self.opacity <= 0.0 && self.fade.is_none();
        doc.set_style(tip, "opacity", &opacity_css(self.opacity));
        doc.set_style(tip, "display", if hidden { "none" } else { "block" });
    }
}

fn opacity_css(opacity: f64) -> String {
    let rounded = (opacity * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Handle given to show and hide effects
pub struct TipHandle<'a> {
    document: &'a mut dyn Document,
    element: ElementId,
    animator: &'a mut Animator,
    now: Instant,
}

impl<'a> TipHandle<'a> {
    pub fn new(
        document: &'a mut dyn Document,
        element: ElementId,
        animator: &'a mut Animator,
        now: Instant,
    ) -> Self {
        TipHandle {
            document,
            element,
            animator,
            now,
        }
    }

    /// The tip container
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn document(&mut self) -> &mut dyn Document {
        &mut *self.document
    }

    pub fn fade_in(&mut self, duration_ms: u64) {
        self.animator
            .fade_to(self.now, 1.0, Duration::from_millis(duration_ms));
        self.animator.apply(self.document, self.element);
    }

    pub fn fade_out(&mut self, duration_ms: u64) {
        self.animator
            .fade_to(self.now, 0.0, Duration::from_millis(duration_ms));
        self.animator.apply(self.document, self.element);
    }

    pub fn show_now(&mut self) {
        self.animator.set(1.0);
        self.animator.apply(self.document, self.element);
    }

    pub fn hide_now(&mut self) {
        self.animator.set(0.0);
        self.animator.apply(self.document, self.element);
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.document.set_style(self.element, property, value);
    }

    /// True when the tip is shown or on its way to being shown
    pub fn is_visible(&self) -> bool {
        self.animator.target() > 0.0
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod animation_tests;
