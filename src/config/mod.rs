//! Configuration tables consumed by the window manager core

pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::{default_config_path, ConfigError, ConfigLoader};
pub use validator::{ConfigValidator, ValidationFinding, ValidationSeverity, ValidationTarget};

use crate::models::{
    binding::{ButtonBinding, KeyBinding},
    color_scheme::{ColorScheme, ColorSchemes, Scheme},
    layout::LayoutDescriptor,
    options::Options,
    window_rule::Rule,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Every table the core reads at startup and on input events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "ConfigFile")]
pub struct Config {
    pub options: Options,
    /// Tag names, one per bit of a tag mask
    pub tags: Vec<String>,
    pub colors: ColorSchemes,
    /// Layout table; the first entry is the default layout
    pub layouts: Vec<LayoutDescriptor>,
    /// Window rules, first match wins
    pub rules: Vec<Rule>,
    pub keys: Vec<KeyBinding>,
    pub buttons: Vec<ButtonBinding>,
}

impl Config {
    /// Process-wide built-in tables, constructed on first access
    pub fn builtin() -> &'static Config {
        static BUILTIN: OnceLock<Config> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let config = Config::default();
            debug!(
                rules = config.rules.len(),
                keys = config.keys.len(),
                buttons = config.buttons.len(),
                layouts = config.layouts.len(),
                "Built-in configuration tables constructed"
            );
            config
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn keys(&self) -> &[KeyBinding] {
        &self.keys
    }

    pub fn buttons(&self) -> &[ButtonBinding] {
        &self.buttons
    }

    pub fn layouts(&self) -> &[LayoutDescriptor] {
        &self.layouts
    }

    pub fn default_layout(&self) -> Option<&LayoutDescriptor> {
        self.layouts.first()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn scheme(&self, scheme: Scheme) -> &ColorScheme {
        self.colors.get(scheme)
    }
}

/// Configuration as read from TOML; a missing section keeps the built-in table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    options: Option<Options>,
    tags: Option<Vec<String>>,
    colors: Option<ColorSchemes>,
    layouts: Option<Vec<LayoutDescriptor>>,
    rules: Option<Vec<Rule>>,
    keys: Option<Vec<KeyBinding>>,
    buttons: Option<Vec<ButtonBinding>>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let tags = file.tags.unwrap_or_else(defaults::tags);
        let tag_count = tags.len();

        Self {
            options: file.options.unwrap_or_else(defaults::options),
            colors: file.colors.unwrap_or_else(defaults::colors),
            layouts: file.layouts.unwrap_or_else(defaults::layouts),
            rules: file.rules.unwrap_or_else(|| defaults::rules_for_tags(tag_count)),
            keys: file.keys.unwrap_or_else(|| defaults::keys_for_tags(tag_count)),
            buttons: file.buttons.unwrap_or_else(defaults::buttons),
            tags,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: defaults::options(),
            tags: defaults::tags(),
            colors: defaults::colors(),
            layouts: defaults::layouts(),
            rules: defaults::rules(),
            keys: defaults::keys(),
            buttons: defaults::buttons(),
        }
    }
}
