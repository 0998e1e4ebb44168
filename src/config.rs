//! Tooltip configuration
//!
//! Options are collected from code (builder methods) or from the TOML config
//! file, then resolved over the defaults into an immutable [`Settings`].

mod config_storage;
mod options;
mod types;

pub use config_storage::{
    BindRule, CONFIG_DIR, Config, config_path, load_config, load_config_from_path,
    parse_config_toml,
};
pub use options::{Content, ContentProvider, ContentRequest, Effect, Settings, TooltipOptions};
pub use types::{AlignTo, DelayValue, Offset, coerce_delay};
