use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;
use thiserror::Error;

/// X11 modifier bitmask as delivered in key and button event state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub struct ModMask(pub u16);

impl ModMask {
    pub const NONE: ModMask = ModMask(0);
    pub const SHIFT: ModMask = ModMask(1 << 0);
    pub const LOCK: ModMask = ModMask(1 << 1);
    pub const CONTROL: ModMask = ModMask(1 << 2);
    /// Usually Alt
    pub const MOD1: ModMask = ModMask(1 << 3);
    /// Usually NumLock
    pub const MOD2: ModMask = ModMask(1 << 4);
    pub const MOD3: ModMask = ModMask(1 << 5);
    /// Usually Super
    pub const MOD4: ModMask = ModMask(1 << 6);
    pub const MOD5: ModMask = ModMask(1 << 7);

    /// Modifiers that take part in binding comparisons
    pub const RELEVANT: ModMask = ModMask(
        Self::SHIFT.0
            | Self::CONTROL.0
            | Self::MOD1.0
            | Self::MOD2.0
            | Self::MOD3.0
            | Self::MOD4.0
            | Self::MOD5.0,
    );

    /// CapsLock and NumLock under its usual Mod2 mapping
    pub const LOCKS: ModMask = ModMask(Self::LOCK.0 | Self::MOD2.0);

    const NAMES: [(ModMask, &'static str); 8] = [
        (Self::MOD4, "Mod4"),
        (Self::MOD1, "Mod1"),
        (Self::MOD2, "Mod2"),
        (Self::MOD3, "Mod3"),
        (Self::MOD5, "Mod5"),
        (Self::CONTROL, "Control"),
        (Self::SHIFT, "Shift"),
        (Self::LOCK, "Lock"),
    ];

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: ModMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn without(self, other: ModMask) -> ModMask {
        ModMask(self.0 & !other.0)
    }

    pub fn intersection(self, other: ModMask) -> ModMask {
        ModMask(self.0 & other.0)
    }

    /// Mask with the lock modifiers removed, as two chords are compared on a key press
    pub fn without_locks(self) -> ModMask {
        self.without(Self::LOCKS).intersection(Self::RELEVANT)
    }
}

impl BitOr for ModMask {
    type Output = ModMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        ModMask(self.0 | rhs.0)
    }
}

impl FromStr for ModMask {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("none") {
            return Ok(ModMask::NONE);
        }

        let mut mask = ModMask::NONE;
        for part in trimmed.split(['+', '|']) {
            let modifier = match part.trim().to_lowercase().as_str() {
                "shift" => ModMask::SHIFT,
                "lock" => ModMask::LOCK,
                "control" | "ctrl" => ModMask::CONTROL,
                "mod1" | "alt" => ModMask::MOD1,
                "mod2" => ModMask::MOD2,
                "mod3" => ModMask::MOD3,
                "mod4" | "super" | "win" => ModMask::MOD4,
                "mod5" => ModMask::MOD5,
                _ => return Err(InputError::UnknownModifier(part.trim().to_string())),
            };
            mask = mask | modifier;
        }
        Ok(mask)
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join("+"))
    }
}

impl TryFrom<String> for ModMask {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModMask> for String {
    fn from(mask: ModMask) -> Self {
        mask.to_string()
    }
}

/// X keysym name such as `Return`, `u` or `XF86AudioPrev`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct KeySym(String);

impl KeySym {
    pub fn new(name: impl Into<String>) -> Result<Self, InputError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '+') {
            return Err(InputError::InvalidKeySym(name));
        }
        Ok(KeySym(name))
    }

    /// Keysym from the built-in tables, whose names are known to be well formed
    pub(crate) fn known(name: &str) -> Self {
        KeySym(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for KeySym {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        KeySym::new(value)
    }
}

impl From<KeySym> for String {
    fn from(key: KeySym) -> Self {
        key.0
    }
}

/// Pointer button
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Button {
    /// Left
    Button1,
    /// Middle
    Button2,
    /// Right
    Button3,
    /// Wheel up
    Button4,
    /// Wheel down
    Button5,
}

impl TryFrom<u8> for Button {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Button::Button1),
            2 => Ok(Button::Button2),
            3 => Ok(Button::Button3),
            4 => Ok(Button::Button4),
            5 => Ok(Button::Button5),
            other => Err(InputError::InvalidButton(other)),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        match button {
            Button::Button1 => 1,
            Button::Button2 => 2,
            Button::Button3 => 3,
            Button::Button4 => 4,
            Button::Button5 => 5,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Button{}", u8::from(*self))
    }
}

/// Screen region a pointer event happened in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClickContext {
    TagBar,
    LtSymbol,
    StatusText,
    WinTitle,
    ClientWin,
    RootWin,
}

impl fmt::Display for ClickContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClickContext::TagBar => "tag-bar",
            ClickContext::LtSymbol => "layout-symbol",
            ClickContext::StatusText => "status-text",
            ClickContext::WinTitle => "window-title",
            ClickContext::ClientWin => "client-window",
            ClickContext::RootWin => "root-window",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("Invalid key symbol: {0:?}")]
    InvalidKeySym(String),
    #[error("Invalid pointer button: {0} (expected 1-5)")]
    InvalidButton(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modmask_parse() {
        assert_eq!("Mod4".parse::<ModMask>().unwrap(), ModMask::MOD4);
        assert_eq!(
            "Mod4+Shift+Control".parse::<ModMask>().unwrap(),
            ModMask::MOD4 | ModMask::SHIFT | ModMask::CONTROL
        );
        assert_eq!("alt|ctrl".parse::<ModMask>().unwrap(), ModMask::MOD1 | ModMask::CONTROL);
        assert_eq!("0".parse::<ModMask>().unwrap(), ModMask::NONE);
        assert!("Hyper".parse::<ModMask>().is_err());
    }

    #[test]
    fn test_modmask_display() {
        assert_eq!((ModMask::SHIFT | ModMask::MOD4).to_string(), "Mod4+Shift");
        assert_eq!(ModMask::NONE.to_string(), "None");
        let mask = ModMask::MOD4 | ModMask::CONTROL | ModMask::SHIFT;
        assert_eq!(mask.to_string().parse::<ModMask>().unwrap(), mask);
    }

    #[test]
    fn test_keysym_validation() {
        assert!(KeySym::new("XF86AudioPrev").is_ok());
        assert!(KeySym::new("").is_err());
        assert!(KeySym::new("Mod4+a").is_err());
        assert!(KeySym::new("two words").is_err());
    }

    #[test]
    fn test_button_conversion() {
        assert_eq!(Button::try_from(3).unwrap(), Button::Button3);
        assert!(Button::try_from(0).is_err());
        assert_eq!(u8::from(Button::Button2), 2);
        assert_eq!(Button::Button1.to_string(), "Button1");
    }
}
