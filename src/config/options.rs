use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use super::types::{AlignTo, DelayValue, Offset, coerce_delay};
use crate::animation::{DEFAULT_FADE_MS, TipHandle};
use crate::dom::{Document, ElementId};
use crate::error::BoxError;
use crate::event::{EventKind, PointerEvent};

pub const DEFAULT_DELAY_MS: u64 = 200;
pub const DEFAULT_CLASS_NAME: &str = "tooltipsy";

/// Arguments handed to a content provider
pub struct ContentRequest<'a> {
    pub trigger: ElementId,
    /// The content node the returned HTML will be written into
    pub tip: ElementId,
    pub document: &'a dyn Document,
}

pub type ContentProvider = Rc<dyn Fn(&ContentRequest<'_>) -> Result<String, BoxError>>;

/// Callback performing a show or hide transition
pub type Effect = Rc<dyn Fn(Option<&PointerEvent>, &mut TipHandle<'_>)>;

/// Tip content: fixed HTML, or computed each time the tip is shown
#[derive(Clone)]
pub enum Content {
    Literal(String),
    Computed(ContentProvider),
}

impl Content {
    pub fn is_computed(&self) -> bool {
        matches!(self, Content::Computed(_))
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Literal(String::new())
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Literal(html) => f.debug_tuple("Literal").field(html).finish(),
            Content::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

fn literal_content<'de, D>(deserializer: D) -> Result<Option<Content>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Content::Literal(String::deserialize(deserializer)?)))
}

/// Caller-supplied options; anything left `None` falls back to the defaults
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    #[serde(alias = "alignTo")]
    pub align_to: Option<AlignTo>,
    pub offset: Option<Offset>,
    #[serde(deserialize_with = "literal_content")]
    pub content: Option<Content>,
    pub delay: Option<DelayValue>,
    pub css: Option<BTreeMap<String, String>>,
    #[serde(alias = "className")]
    pub class_name: Option<String>,
    #[serde(alias = "showEvent")]
    pub show_event: Option<EventKind>,
    #[serde(alias = "hideEvent")]
    pub hide_event: Option<EventKind>,
    #[serde(skip)]
    pub show: Option<Effect>,
    #[serde(skip)]
    pub hide: Option<Effect>,
}

impl TooltipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align_to(mut self, align_to: AlignTo) -> Self {
        self.align_to = Some(align_to);
        self
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = Some(Offset::new(dx, dy));
        self
    }

    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(Content::Literal(html.into()));
        self
    }

    pub fn content_fn<F>(mut self, provider: F) -> Self
    where
        F: Fn(&ContentRequest<'_>) -> Result<String, BoxError> + 'static,
    {
        self.content = Some(Content::Computed(Rc::new(provider)));
        self
    }

    pub fn delay(mut self, delay: impl Into<DelayValue>) -> Self {
        self.delay = Some(delay.into());
        self
    }

    pub fn css(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.css
            .get_or_insert_with(BTreeMap::new)
            .insert(property.into(), value.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn show_event(mut self, event: impl Into<EventKind>) -> Self {
        self.show_event = Some(event.into());
        self
    }

    pub fn hide_event(mut self, event: impl Into<EventKind>) -> Self {
        self.hide_event = Some(event.into());
        self
    }

    pub fn on_show<F>(mut self, effect: F) -> Self
    where
        F: Fn(Option<&PointerEvent>, &mut TipHandle<'_>) + 'static,
    {
        self.show = Some(Rc::new(effect));
        self
    }

    pub fn on_hide<F>(mut self, effect: F) -> Self
    where
        F: Fn(Option<&PointerEvent>, &mut TipHandle<'_>) + 'static,
    {
        self.hide = Some(Rc::new(effect));
        self
    }

    /// Layer `self` over `base`: fields set here win, the rest come from `base`
    pub fn merged_over(&self, base: &TooltipOptions) -> TooltipOptions {
        TooltipOptions {
            align_to: self.align_to.or(base.align_to),
            offset: self.offset.or(base.offset),
            content: self.content.clone().or_else(|| base.content.clone()),
            delay: self.delay.clone().or_else(|| base.delay.clone()),
            css: self.css.clone().or_else(|| base.css.clone()),
            class_name: self.class_name.clone().or_else(|| base.class_name.clone()),
            show_event: self.show_event.clone().or_else(|| base.show_event.clone()),
            hide_event: self.hide_event.clone().or_else(|| base.hide_event.clone()),
            show: self.show.clone().or_else(|| base.show.clone()),
            hide: self.hide.clone().or_else(|| base.hide.clone()),
        }
    }
}

impl fmt::Debug for TooltipOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipOptions")
            .field("align_to", &self.align_to)
            .field("offset", &self.offset)
            .field("content", &self.content)
            .field("delay", &self.delay)
            .field("css", &self.css)
            .field("class_name", &self.class_name)
            .field("show_event", &self.show_event)
            .field("hide_event", &self.hide_event)
            .field("show", &self.show.as_ref().map(|_| ".."))
            .field("hide", &self.hide.as_ref().map(|_| ".."))
            .finish()
    }
}

fn default_show() -> Effect {
    Rc::new(|_: Option<&PointerEvent>, tip: &mut TipHandle<'_>| {
        tip.fade_in(DEFAULT_FADE_MS)
    })
}

fn default_hide() -> Effect {
    Rc::new(|_: Option<&PointerEvent>, tip: &mut TipHandle<'_>| {
        tip.fade_out(DEFAULT_FADE_MS)
    })
}

/// Options resolved over the defaults
#[derive(Clone)]
pub struct Settings {
    pub align_to: AlignTo,
    pub offset: Offset,
    pub content: Content,
    /// Milliseconds, already coerced
    pub delay: u64,
    pub css: BTreeMap<String, String>,
    pub class_name: String,
    pub show_event: EventKind,
    pub hide_event: EventKind,
    pub show: Effect,
    pub hide: Effect,
}

impl Settings {
    pub fn resolve(options: &TooltipOptions) -> Self {
        Settings {
            align_to: options.align_to.unwrap_or_default(),
            offset: options.offset.unwrap_or_default(),
            content: options.content.clone().unwrap_or_default(),
            delay: options
                .delay
                .as_ref()
                .map_or(DEFAULT_DELAY_MS, coerce_delay),
            css: options.css.clone().unwrap_or_default(),
            class_name: options
                .class_name
                .clone()
                .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string()),
            show_event: options.show_event.clone().unwrap_or(EventKind::MouseEnter),
            hide_event: options.hide_event.clone().unwrap_or(EventKind::MouseLeave),
            show: options.show.clone().unwrap_or_else(default_show),
            hide: options.hide.clone().unwrap_or_else(default_hide),
        }
    }

    pub fn delay_duration(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Show and hide share the click event, so each click flips the tip
    pub fn toggles_on_click(&self) -> bool {
        self.show_event == EventKind::Click && self.hide_event == EventKind::Click
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(&TooltipOptions::default())
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("align_to", &self.align_to)
            .field("offset", &self.offset)
            .field("content", &self.content)
            .field("delay", &self.delay)
            .field("css", &self.css)
            .field("class_name", &self.class_name)
            .field("show_event", &self.show_event)
            .field("hide_event", &self.hide_event)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "align_to = \"{}\"", self.align_to)?;
        writeln!(f, "offset = {}", self.offset)?;
        match &self.content {
            Content::Literal(html) => writeln!(f, "content = {:?}", html)?,
            Content::Computed(_) => writeln!(f, "content = <computed>")?,
        }
        writeln!(f, "delay = {}", self.delay)?;
        writeln!(f, "class_name = \"{}\"", self.class_name)?;
        writeln!(f, "show_event = \"{}\"", self.show_event)?;
        writeln!(f, "hide_event = \"{}\"", self.hide_event)?;
        if !self.css.is_empty() {
            writeln!(f, "[css]")?;
            for (property, value) in &self.css {
                writeln!(f, "{property} = \"{value}\"")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
