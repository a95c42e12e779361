//! Configuration management for barcus.
//!
//! This module handles loading and saving configuration from `~/.barcus/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ReplConfig};
