use super::action::{Action, TagArg};
use super::input::{Button, ClickContext, KeySym, ModMask};
use super::tag::TagMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyboard shortcut bound to an action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyBinding {
    pub modifiers: ModMask,
    pub key: KeySym,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(modifiers: ModMask, key: KeySym, action: Action) -> Self {
        Self {
            modifiers,
            key,
            action,
        }
    }

    /// Two bindings conflict when they react to the same chord, lock modifiers aside
    pub fn conflicts_with(&self, other: &KeyBinding) -> bool {
        self.modifiers.without_locks() == other.modifiers.without_locks() && self.key == other.key
    }

    pub fn chord(&self) -> String {
        if self.modifiers.is_empty() {
            self.key.to_string()
        } else {
            format!("{}+{}", self.modifiers, self.key)
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.chord(), self.action)
    }
}

/// Pointer button bound to an action within a click context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonBinding {
    pub click: ClickContext,
    pub modifiers: ModMask,
    pub button: Button,
    pub action: Action,
}

impl ButtonBinding {
    pub fn new(click: ClickContext, modifiers: ModMask, button: Button, action: Action) -> Self {
        Self {
            click,
            modifiers,
            button,
            action,
        }
    }

    pub fn conflicts_with(&self, other: &ButtonBinding) -> bool {
        self.click == other.click
            && self.button == other.button
            && self.modifiers.without_locks() == other.modifiers.without_locks()
    }
}

impl fmt::Display for ButtonBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} {} => {}", self.click, self.button, self.action)
        } else {
            write!(f, "{} {}+{} => {}", self.click, self.modifiers, self.button, self.action)
        }
    }
}

/// The four bindings every tag gets: view, toggle view, move to, toggle on
pub fn tag_keys(modkey: ModMask, toggle_view_mod: ModMask, key: KeySym, tag: usize) -> [KeyBinding; 4] {
    let mask = TagArg::Mask(TagMask::single(tag));
    [
        KeyBinding::new(modkey, key.clone(), Action::View(mask)),
        KeyBinding::new(toggle_view_mod, key.clone(), Action::ToggleView(mask)),
        KeyBinding::new(modkey | ModMask::SHIFT, key.clone(), Action::Tag(mask)),
        KeyBinding::new(modkey | ModMask::CONTROL, key, Action::ToggleTag(mask)),
    ]
}
