use super::window_rule::FloatGeometry;
use serde::{Deserialize, Serialize};

/// Scalar appearance and behaviour settings read once at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Border width of windows in pixels
    pub border_px: u32,
    /// Gap between tiled windows in pixels
    pub gap_px: u32,
    /// Snap distance in pixels
    pub snap: u32,
    /// 0: the systray follows the selected monitor, n: pinned to monitor n
    pub systray_pinning: u32,
    /// Place the systray left of the status text
    pub systray_on_left: bool,
    pub systray_spacing: u32,
    /// When pinning fails, use the first monitor instead of the last
    pub systray_pinning_fail_first: bool,
    pub show_systray: bool,
    pub show_bar: bool,
    /// Bar at the top of the screen rather than the bottom
    pub top_bar: bool,
    /// Vertical padding of the bar
    pub vert_pad: i32,
    /// Horizontal padding of the bar
    pub side_pad: i32,
    pub fonts: Vec<String>,
    /// Fraction of the screen taken by the master area, within [0.05, 0.95]
    pub m_fact: f32,
    /// Number of clients in the master area
    pub n_master: i32,
    /// Respect size hints in tiled resizes
    pub resize_hints: bool,
    /// Floating geometry used when no rule supplies one
    pub default_geometry: FloatGeometry,
}

impl Options {
    pub const M_FACT_MIN: f32 = 0.05;
    pub const M_FACT_MAX: f32 = 0.95;
}

impl Default for Options {
    fn default() -> Self {
        Self {
            border_px: 0,
            gap_px: 0,
            snap: 32,
            systray_pinning: 0,
            systray_on_left: false,
            systray_spacing: 4,
            systray_pinning_fail_first: true,
            show_systray: true,
            show_bar: true,
            top_bar: true,
            vert_pad: 0,
            side_pad: 0,
            fonts: vec!["Ubuntu Mono Nerd Font:size=12:style=Normal".to_string()],
            m_fact: 0.50,
            n_master: 1,
            resize_hints: true,
            default_geometry: FloatGeometry::new(550, 250, 800, 600),
        }
    }
}
