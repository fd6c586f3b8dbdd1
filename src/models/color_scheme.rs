use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static color regex"))
}

/// `#rrggbb` color string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Result<Self, ColorError> {
        let color = Color(value.into());
        color.validate()?;
        Ok(color)
    }

    pub(crate) fn known(value: &str) -> Self {
        Color(value.to_string())
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        if hex_color_regex().is_match(&self.0) {
            Ok(())
        } else {
            Err(ColorError::InvalidColor(self.0.clone()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components
    pub fn rgb(&self) -> Result<(u8, u8, u8), ColorError> {
        self.validate()?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).map_err(|_| ColorError::InvalidColor(self.0.clone()))
        };
        Ok((channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of color schemes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Unfocused windows and the idle bar
    Norm,
    /// Focused window and selected bar items
    Sel,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Norm, Scheme::Sel];
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Norm => write!(f, "norm"),
            Scheme::Sel => write!(f, "sel"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorScheme {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl ColorScheme {
    pub fn new(fg: Color, bg: Color, border: Color) -> Self {
        Self { fg, bg, border }
    }

    pub fn colors(&self) -> [(&'static str, &Color); 3] {
        [("fg", &self.fg), ("bg", &self.bg), ("border", &self.border)]
    }
}

/// One color scheme per [`Scheme`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSchemes {
    pub norm: ColorScheme,
    pub sel: ColorScheme,
}

impl ColorSchemes {
    pub fn get(&self, scheme: Scheme) -> &ColorScheme {
        match scheme {
            Scheme::Norm => &self.norm,
            Scheme::Sel => &self.sel,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &ColorScheme)> {
        Scheme::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
