use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrangement algorithms implemented by the window manager core
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Arrange {
    /// Master area on the left, stack on the right
    Tile,
    /// One maximised client at a time
    Monocle,
    Grid,
    /// Fibonacci spiral
    Spiral,
    /// Master area on top, stack below
    Bstack,
}

impl fmt::Display for Arrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arrange::Tile => "tile",
            Arrange::Monocle => "monocle",
            Arrange::Grid => "grid",
            Arrange::Spiral => "spiral",
            Arrange::Bstack => "bstack",
        };
        f.write_str(name)
    }
}

/// Entry of the layout table: bar symbol plus arrangement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub symbol: String,
    /// `None` leaves windows floating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrange: Option<Arrange>,
}

impl LayoutDescriptor {
    pub fn new(symbol: &str, arrange: Option<Arrange>) -> Self {
        Self {
            symbol: symbol.to_string(),
            arrange,
        }
    }

    pub fn is_floating(&self) -> bool {
        self.arrange.is_none()
    }
}

impl fmt::Display for LayoutDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arrange {
            Some(arrange) => write!(f, "{:?} {}", self.symbol, arrange),
            None => write!(f, "{:?} floating", self.symbol),
        }
    }
}
