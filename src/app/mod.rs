//! Terminal demo host
//!
//! Lays out a row of buttons in a [`MemoryDocument`](crate::dom::MemoryDocument),
//! binds tooltips to them and translates crossterm mouse input into the
//! pointer events the tooltips listen for.

mod app_events;
mod app_render;
mod app_state;
mod mouse_hover;

pub use app_state::{App, Button};

use crate::config::{Config, Settings, TooltipOptions};

/// The effective `[tooltip]` settings after command-line overrides, followed
/// by one section per `[[bind]]` rule
pub fn describe_config(config: &Config, overrides: &TooltipOptions) -> String {
    let shared = Settings::resolve(&overrides.merged_over(&config.tooltip));
    let mut out = format!("[tooltip]\n{shared}");

    for rule in &config.bind {
        let settings = Settings::resolve(&overrides.merged_over(&config.options_for(rule)));
        out.push_str(&format!("\n[[bind]]\nselector = {:?}\n{settings}", rule.selector));
    }
    out
}
