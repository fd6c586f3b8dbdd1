use super::command::Command;
use super::tag::TagMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tags a tag action operates on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TagArg {
    /// The previously viewed tag set
    Previous,
    /// The tag under the pointer (tag bar clicks only)
    Clicked,
    /// An explicit tag mask
    Mask(TagMask),
}

/// Argument of a layout switch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutArg {
    /// Swap back to the previously selected layout
    Toggle,
    /// Select the layout at this index of the layout table
    Index(usize),
}

/// Argument of a gap adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GapsArg {
    /// Grow or shrink the gap by this many pixels, never below zero
    Adjust(i32),
    /// Drop the gap to zero
    Reset,
}

/// Named scratchpad: the window is found by its rule's scratch key, spawned with `command` when absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scratchpad {
    pub key: char,
    pub command: Command,
}

impl Scratchpad {
    pub fn new(key: char, command: Command) -> Self {
        Self { key, command }
    }
}

/// Operation the window manager core performs when a binding fires
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum Action {
    Spawn(Command),
    ToggleScratch(Scratchpad),
    SetLayout(LayoutArg),
    ToggleBar,
    /// Focus the next (+) or previous (-) visible client
    FocusStackVisible(i32),
    /// Focus the next (+) or previous (-) client including hidden ones
    FocusStackHidden(i32),
    IncNMaster(i32),
    /// Relative change of the master area fraction
    SetMFact(f32),
    View(TagArg),
    ToggleView(TagArg),
    Tag(TagArg),
    ToggleTag(TagArg),
    KillClient,
    ToggleFullscreen,
    Zoom,
    FocusMonitor(i32),
    TagMonitor(i32),
    SetGaps(GapsArg),
    ToggleFloating,
    Show,
    Hide,
    ToggleWindow,
    MoveMouse,
    ResizeMouse,
    Quit,
}

impl Action {
    /// Stable snake_case name of the action, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Action::Spawn(_) => "spawn",
            Action::ToggleScratch(_) => "toggle_scratch",
            Action::SetLayout(_) => "set_layout",
            Action::ToggleBar => "toggle_bar",
            Action::FocusStackVisible(_) => "focus_stack_visible",
            Action::FocusStackHidden(_) => "focus_stack_hidden",
            Action::IncNMaster(_) => "inc_n_master",
            Action::SetMFact(_) => "set_m_fact",
            Action::View(_) => "view",
            Action::ToggleView(_) => "toggle_view",
            Action::Tag(_) => "tag",
            Action::ToggleTag(_) => "toggle_tag",
            Action::KillClient => "kill_client",
            Action::ToggleFullscreen => "toggle_fullscreen",
            Action::Zoom => "zoom",
            Action::FocusMonitor(_) => "focus_monitor",
            Action::TagMonitor(_) => "tag_monitor",
            Action::SetGaps(_) => "set_gaps",
            Action::ToggleFloating => "toggle_floating",
            Action::Show => "show",
            Action::Hide => "hide",
            Action::ToggleWindow => "toggle_window",
            Action::MoveMouse => "move_mouse",
            Action::ResizeMouse => "resize_mouse",
            Action::Quit => "quit",
        }
    }

    /// Tag argument carried by the tag family of actions
    pub fn tag_arg(&self) -> Option<TagArg> {
        match self {
            Action::View(arg) | Action::ToggleView(arg) | Action::Tag(arg) | Action::ToggleTag(arg) => {
                Some(*arg)
            }
            _ => None,
        }
    }

    /// Copy of this action with a `Clicked` tag argument replaced by `mask`
    pub fn with_clicked_tag(&self, mask: TagMask) -> Action {
        let resolve = |arg: &TagArg| match arg {
            TagArg::Clicked => TagArg::Mask(mask),
            other => *other,
        };
        match self {
            Action::View(arg) => Action::View(resolve(arg)),
            Action::ToggleView(arg) => Action::ToggleView(resolve(arg)),
            Action::Tag(arg) => Action::Tag(resolve(arg)),
            Action::ToggleTag(arg) => Action::ToggleTag(resolve(arg)),
            other => other.clone(),
        }
    }

    /// Command this action may launch
    pub fn command(&self) -> Option<&Command> {
        match self {
            Action::Spawn(cmd) => Some(cmd),
            Action::ToggleScratch(pad) => Some(&pad.command),
            _ => None,
        }
    }
}

impl fmt::Display for TagArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagArg::Previous => write!(f, "previous"),
            TagArg::Clicked => write!(f, "clicked"),
            TagArg::Mask(mask) => write!(f, "[{}]", mask),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn(cmd) => write!(f, "spawn {}", cmd),
            Action::ToggleScratch(pad) => write!(f, "toggle_scratch '{}' {}", pad.key, pad.command),
            Action::SetLayout(LayoutArg::Toggle) => write!(f, "set_layout toggle"),
            Action::SetLayout(LayoutArg::Index(i)) => write!(f, "set_layout {}", i),
            Action::FocusStackVisible(n)
            | Action::FocusStackHidden(n)
            | Action::IncNMaster(n)
            | Action::FocusMonitor(n)
            | Action::TagMonitor(n) => write!(f, "{} {:+}", self.name(), n),
            Action::SetMFact(delta) => write!(f, "set_m_fact {:+.2}", delta),
            Action::View(arg) | Action::ToggleView(arg) | Action::Tag(arg) | Action::ToggleTag(arg) => {
                write!(f, "{} {}", self.name(), arg)
            }
            Action::SetGaps(GapsArg::Adjust(n)) => write!(f, "set_gaps {:+}", n),
            Action::SetGaps(GapsArg::Reset) => write!(f, "set_gaps reset"),
            _ => f.write_str(self.name()),
        }
    }
}
