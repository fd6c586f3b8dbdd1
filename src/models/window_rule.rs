use super::options::Options;
use super::tag::TagMask;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monitor index meaning "wherever the window shows up"
pub const ANY_MONITOR: i32 = -1;

/// Position and size of a floating window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloatGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl FloatGeometry {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Properties of a newly mapped window that rules are matched against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProperties {
    /// WM_CLASS class part
    pub class: String,
    /// WM_CLASS instance part
    pub instance: String,
    /// Window title
    pub title: String,
}

impl WindowProperties {
    pub fn new(class: impl Into<String>, instance: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            instance: instance.into(),
            title: title.into(),
        }
    }
}

/// Placement directives applied to windows whose properties match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    /// Substring of the window class; absent matches anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Substring of the window instance; absent matches anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Substring of the window title; absent matches anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tags assigned to the window, empty keeps the current view
    #[serde(default)]
    pub tags: TagMask,
    #[serde(default)]
    pub floating: bool,
    /// Target monitor, [`ANY_MONITOR`] for no preference
    #[serde(default = "default_monitor")]
    pub monitor: i32,
    /// Floating geometry, the default geometry of [`Options`] when omitted
    #[serde(default = "default_geometry")]
    pub geometry: FloatGeometry,
    /// Border width while floating
    #[serde(default = "default_border_px")]
    pub float_border_px: u32,
    /// Scratchpad identifier this rule's window answers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_key: Option<char>,
}

fn default_monitor() -> i32 {
    ANY_MONITOR
}

fn default_geometry() -> FloatGeometry {
    Options::default().default_geometry
}

fn default_border_px() -> u32 {
    Options::default().border_px
}

impl Rule {
    /// Rule keyed on the window class
    pub fn for_class(class: &str, tags: TagMask, geometry: FloatGeometry, float_border_px: u32) -> Self {
        Self {
            class: Some(class.to_string()),
            instance: None,
            title: None,
            tags,
            floating: false,
            monitor: ANY_MONITOR,
            geometry,
            float_border_px,
            scratch_key: None,
        }
    }

    /// Floating scratchpad rule keyed on the window title
    pub fn scratchpad(title: &str, key: char, geometry: FloatGeometry, float_border_px: u32) -> Self {
        Self {
            class: None,
            instance: None,
            title: Some(title.to_string()),
            tags: TagMask::EMPTY,
            floating: true,
            monitor: ANY_MONITOR,
            geometry,
            float_border_px,
            scratch_key: Some(key),
        }
    }

    pub fn floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }

    /// Whether every present pattern occurs in the corresponding window property
    pub fn matches(&self, window: &WindowProperties) -> bool {
        fn field_matches(pattern: &Option<String>, value: &str) -> bool {
            pattern.as_deref().map_or(true, |p| value.contains(p))
        }

        field_matches(&self.class, &window.class)
            && field_matches(&self.instance, &window.instance)
            && field_matches(&self.title, &window.title)
    }

    /// True when every window matching `later` also matches `self`
    pub fn shadows(&self, later: &Rule) -> bool {
        fn covers(earlier: &Option<String>, later: &Option<String>) -> bool {
            match (earlier, later) {
                (None, _) => true,
                (Some(_), None) => false,
                (Some(e), Some(l)) => l.contains(e.as_str()),
            }
        }

        covers(&self.class, &later.class)
            && covers(&self.instance, &later.instance)
            && covers(&self.title, &later.title)
    }

    pub fn is_wildcard(&self) -> bool {
        self.class.is_none() && self.instance.is_none() && self.title.is_none()
    }

    /// Short human readable form of the match patterns
    pub fn pattern_summary(&self) -> String {
        let show = |p: &Option<String>| p.clone().unwrap_or_else(|| "*".to_string());
        format!(
            "class={} instance={} title={}",
            show(&self.class),
            show(&self.instance),
            show(&self.title)
        )
    }

    pub fn validate(&self, tag_count: usize) -> Result<(), WindowRuleError> {
        for pattern in [&self.class, &self.instance, &self.title].into_iter().flatten() {
            if pattern.is_empty() {
                return Err(WindowRuleError::EmptyPattern);
            }
        }

        if !self.tags.fits(tag_count) {
            return Err(WindowRuleError::TagMaskOutOfRange(self.tags.bits(), tag_count));
        }

        if self.geometry.width == 0 || self.geometry.height == 0 {
            return Err(WindowRuleError::InvalidGeometryDimensions);
        }

        if self.monitor < ANY_MONITOR {
            return Err(WindowRuleError::InvalidMonitor(self.monitor));
        }

        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowRuleError {
    #[error("Match pattern cannot be empty; leave it out to match anything")]
    EmptyPattern,
    #[error("Tag mask {0:#x} addresses tags beyond the {1} declared")]
    TagMaskOutOfRange(u32, usize),
    #[error("Floating geometry must have positive width and height")]
    InvalidGeometryDimensions,
    #[error("Invalid monitor index: {0}")]
    InvalidMonitor(i32),
}
