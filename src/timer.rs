//! Delayed show timer
//!
//! One pending deadline per tooltip. The event loop owns the clock and passes
//! `now` in, so nothing here sleeps or spawns.

use std::time::{Duration, Instant};

use crate::event::PointerEvent;

#[derive(Debug, Clone)]
struct Pending {
    deadline: Instant,
    event: Option<PointerEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct DelayTimer {
    pending: Option<Pending>,
}

impl DelayTimer {
    /// Start the timer, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, delay: Duration, event: Option<PointerEvent>) {
        self.pending = Some(Pending {
            deadline: now + delay,
            event,
        });
    }

    /// Drop the pending deadline; returns true if one was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Take the stored event once the deadline has passed.
    ///
    /// The outer `Option` says whether the timer fired, the inner one is the
    /// event that armed it.
    pub fn fire(&mut self, now: Instant) -> Option<Option<PointerEvent>> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.event)
    }
}
