//! Built-in configuration tables

use crate::models::{
    action::{Action, GapsArg, LayoutArg, Scratchpad, TagArg},
    binding::{tag_keys, ButtonBinding, KeyBinding},
    color_scheme::{Color, ColorScheme, ColorSchemes},
    command::Command,
    input::{Button, ClickContext, KeySym, ModMask},
    layout::{Arrange, LayoutDescriptor},
    options::Options,
    tag::TagMask,
    window_rule::{FloatGeometry, Rule},
};

/// Main modifier (Super)
pub const MODKEY: ModMask = ModMask::MOD4;
/// Modifier for toggling a tag into the view
pub const TOGGLE_VIEW_MOD: ModMask = ModMask::MOD1;

/// Default floating geometry
pub const DFX: i32 = 550;
pub const DFY: i32 = 250;
pub const DFW: u32 = 800;
pub const DFH: u32 = 600;

/// Tags reachable from the number row
const NUMBER_KEYS: usize = 9;

/// Border width of floating application windows
const APP_BORDER_PX: u32 = 5;
/// Border width of scratchpad windows
const SCRATCH_BORDER_PX: u32 = 0;

const COL_STATUSBAR_FG: &str = "#ffffff";
const COL_STATUSBAR_BG: &str = "#000000";
const COL_PRIMARY_FG: &str = "#ffffff";
const COL_PRIMARY_BG: &str = "#1c4289";
const COL_BORDER: &str = "#000000";
const COL_BORDER_SEL: &str = "#1c4289";

pub fn tags() -> Vec<String> {
    (1..=9).map(|i| i.to_string()).collect()
}

pub fn colors() -> ColorSchemes {
    ColorSchemes {
        norm: ColorScheme::new(
            Color::known(COL_STATUSBAR_FG),
            Color::known(COL_STATUSBAR_BG),
            Color::known(COL_BORDER),
        ),
        sel: ColorScheme::new(
            Color::known(COL_PRIMARY_FG),
            Color::known(COL_PRIMARY_BG),
            Color::known(COL_BORDER_SEL),
        ),
    }
}

/// First entry is the default layout
pub fn layouts() -> Vec<LayoutDescriptor> {
    vec![
        LayoutDescriptor::new("\u{ed70} ", Some(Arrange::Tile)),
        LayoutDescriptor::new("\u{f095b} ", None),
        LayoutDescriptor::new("\u{f0764} ", Some(Arrange::Monocle)),
        LayoutDescriptor::new("\u{f15fc}", Some(Arrange::Grid)),
        LayoutDescriptor::new("\u{f110} ", Some(Arrange::Spiral)),
        LayoutDescriptor::new("\u{ed76} ", Some(Arrange::Bstack)),
    ]
}

pub fn rules() -> Vec<Rule> {
    rules_for_tags(tags().len())
}

/// Built-in rules with tags past `tag_count` dropped; a rule left without tags keeps the current view
pub fn rules_for_tags(tag_count: usize) -> Vec<Rule> {
    let app = FloatGeometry::new(DFX, DFY, DFW, DFH);
    let wide = FloatGeometry::new(DFX - 50, DFY, DFW + 50, DFH);

    let apps: [(&str, TagMask); 14] = [
        ("Gimp", TagMask::single(4)),
        ("Inkscape", TagMask::single(4)),
        ("Firefox", TagMask(3)),
        ("TelegramDesktop", TagMask::single(2)),
        ("qBittorrent", TagMask::single(3)),
        ("zoom", TagMask::single(6)),
        ("figma-linux", TagMask::single(4)),
        ("discord", TagMask::single(7)),
        ("VSCodium", TagMask::single(2)),
        ("Steam", TagMask::single(3)),
        ("Tk", TagMask::EMPTY),
        ("Pavucontrol", TagMask::single(8)),
        ("Pulseeffects", TagMask::single(8)),
        ("Blender", TagMask::single(4)),
    ];

    let mut rules: Vec<Rule> = apps
        .iter()
        .map(|(class, tags)| Rule::for_class(class, *tags, app, APP_BORDER_PX).floating(*class == "Tk"))
        .collect();

    let valid = TagMask::full(tag_count);
    for rule in &mut rules {
        rule.tags = rule.tags & valid;
    }

    rules.extend([
        Rule::scratchpad("aditya - Thunar", 'n', app, SCRATCH_BORDER_PX),
        Rule::scratchpad("scratchpad", 's', app, SCRATCH_BORDER_PX),
        Rule::scratchpad("gomp", 'y', wide, SCRATCH_BORDER_PX),
        Rule::scratchpad("gspt", 'g', wide, SCRATCH_BORDER_PX),
        Rule::scratchpad("tremc", 't', wide, SCRATCH_BORDER_PX),
        Rule::scratchpad("Select Color", 'c', wide, SCRATCH_BORDER_PX),
        Rule::scratchpad("Ideas", 'i', wide, SCRATCH_BORDER_PX),
    ]);

    rules
}

pub fn term_cmd() -> Command {
    Command::new(["/usr/bin/alacritty"])
}

fn web_cmd() -> Command {
    Command::new(["/usr/bin/microsoft-edge"])
}

fn torrent_scratch() -> Scratchpad {
    Scratchpad::new('t', Command::new(["alacritty", "-t", "tremc", "-e", "tremc"]))
}

fn file_manager_scratch() -> Scratchpad {
    Scratchpad::new('n', Command::new(["/usr/bin/thunar"]))
}

fn color_chooser_scratch() -> Scratchpad {
    Scratchpad::new('c', Command::new(["/usr/bin/kcolorchooser"]))
}

pub fn keys() -> Vec<KeyBinding> {
    keys_for_tags(tags().len())
}

/// Built-in key table with view/tag bindings on the number keys for the first `tag_count` tags
pub fn keys_for_tags(tag_count: usize) -> Vec<KeyBinding> {
    let k = KeySym::known;
    let none = ModMask::NONE;
    let shift = MODKEY | ModMask::SHIFT;
    let sh = |cmd: &str| Action::Spawn(Command::shell(cmd));

    let mut keys = vec![
        KeyBinding::new(MODKEY, k("u"), Action::Spawn(web_cmd())),
        KeyBinding::new(MODKEY, k("Return"), Action::Spawn(term_cmd())),
        KeyBinding::new(MODKEY, k("e"), Action::ToggleScratch(file_manager_scratch())),
        KeyBinding::new(MODKEY, k("q"), Action::ToggleScratch(torrent_scratch())),
        KeyBinding::new(
            MODKEY | ModMask::CONTROL | ModMask::SHIFT,
            k("c"),
            Action::ToggleScratch(color_chooser_scratch()),
        ),
        KeyBinding::new(none, k("XF86AudioPrev"), sh("mpc prev")),
        KeyBinding::new(none, k("XF86AudioNext"), sh("mpc next")),
        KeyBinding::new(none, k("XF86AudioPlay"), sh("mpc toggle")),
        KeyBinding::new(none, k("XF86AudioStop"), sh("mpc stop")),
        KeyBinding::new(none, k("XF86AudioLowerVolume"), sh("pamixer -d 5")),
        KeyBinding::new(none, k("XF86AudioRaiseVolume"), sh("pamixer -i 5")),
        KeyBinding::new(MODKEY, k("F10"), sh("xbacklight -inc 10")),
        KeyBinding::new(MODKEY, k("F9"), sh("xbacklight -dec 10")),
        KeyBinding::new(none, k("XF86MonBrightnessUp"), sh("xbacklight -inc 10")),
        KeyBinding::new(none, k("XF86MonBrightnessDown"), sh("xbacklight -dec 10")),
        KeyBinding::new(shift, k("F5"), sh("reload_keys")),
        KeyBinding::new(MODKEY, k("v"), sh("copyq menu")),
        KeyBinding::new(MODKEY, k("t"), Action::SetLayout(LayoutArg::Index(0))),
        KeyBinding::new(MODKEY, k("m"), Action::SetLayout(LayoutArg::Index(2))),
        KeyBinding::new(MODKEY, k("g"), Action::SetLayout(LayoutArg::Index(3))),
        KeyBinding::new(MODKEY, k("s"), Action::SetLayout(LayoutArg::Index(4))),
        KeyBinding::new(MODKEY, k("b"), Action::SetLayout(LayoutArg::Index(5))),
        KeyBinding::new(TOGGLE_VIEW_MOD, k("b"), Action::ToggleBar),
        KeyBinding::new(MODKEY, k("j"), Action::FocusStackVisible(1)),
        KeyBinding::new(MODKEY, k("k"), Action::FocusStackVisible(-1)),
        KeyBinding::new(shift, k("j"), Action::FocusStackHidden(1)),
        KeyBinding::new(shift, k("k"), Action::FocusStackHidden(-1)),
        KeyBinding::new(shift, k("minus"), Action::IncNMaster(1)),
        KeyBinding::new(MODKEY, k("d"), Action::IncNMaster(-1)),
        KeyBinding::new(MODKEY, k("h"), Action::SetMFact(-0.05)),
        KeyBinding::new(MODKEY, k("l"), Action::SetMFact(0.05)),
        KeyBinding::new(MODKEY, k("Tab"), Action::View(TagArg::Previous)),
        KeyBinding::new(shift, k("c"), Action::KillClient),
        KeyBinding::new(MODKEY, k("c"), Action::KillClient),
        KeyBinding::new(MODKEY, k("f"), Action::ToggleFullscreen),
        // Mod4+m selects the monocle layout
        KeyBinding::new(shift, k("Return"), Action::Zoom),
        KeyBinding::new(MODKEY, k("0"), Action::View(TagArg::Mask(TagMask::ALL))),
        KeyBinding::new(shift, k("0"), Action::Tag(TagArg::Mask(TagMask::ALL))),
        KeyBinding::new(MODKEY, k("comma"), Action::FocusMonitor(-1)),
        KeyBinding::new(MODKEY, k("period"), Action::FocusMonitor(1)),
        KeyBinding::new(shift, k("comma"), Action::TagMonitor(-1)),
        KeyBinding::new(shift, k("period"), Action::TagMonitor(1)),
        KeyBinding::new(MODKEY, k("minus"), Action::SetGaps(GapsArg::Adjust(-1))),
        KeyBinding::new(MODKEY, k("equal"), Action::SetGaps(GapsArg::Adjust(1))),
        KeyBinding::new(shift, k("equal"), Action::SetGaps(GapsArg::Reset)),
        KeyBinding::new(shift, k("space"), Action::ToggleFloating),
        // Mod4+s selects the spiral layout
        KeyBinding::new(shift, k("s"), Action::Show),
        KeyBinding::new(MODKEY, k("o"), Action::Hide),
    ];

    for tag in 0..tag_count.min(NUMBER_KEYS) {
        let key = KeySym::known(&(tag + 1).to_string());
        keys.extend(tag_keys(MODKEY, TOGGLE_VIEW_MOD, key, tag));
    }

    keys.push(KeyBinding::new(
        MODKEY | ModMask::SHIFT | ModMask::CONTROL,
        k("q"),
        Action::Quit,
    ));

    keys
}

pub fn buttons() -> Vec<ButtonBinding> {
    use Button::*;
    use ClickContext::*;

    let none = ModMask::NONE;
    vec![
        ButtonBinding::new(LtSymbol, none, Button1, Action::SetLayout(LayoutArg::Toggle)),
        ButtonBinding::new(LtSymbol, none, Button3, Action::SetLayout(LayoutArg::Index(2))),
        ButtonBinding::new(WinTitle, none, Button1, Action::ToggleWindow),
        ButtonBinding::new(WinTitle, none, Button2, Action::Zoom),
        ButtonBinding::new(StatusText, none, Button2, Action::Spawn(term_cmd())),
        ButtonBinding::new(ClientWin, MODKEY, Button1, Action::MoveMouse),
        ButtonBinding::new(ClientWin, MODKEY, Button2, Action::ToggleFloating),
        ButtonBinding::new(ClientWin, MODKEY, Button3, Action::ResizeMouse),
        ButtonBinding::new(TagBar, none, Button1, Action::View(TagArg::Clicked)),
        ButtonBinding::new(TagBar, none, Button3, Action::ToggleView(TagArg::Clicked)),
        ButtonBinding::new(TagBar, MODKEY, Button1, Action::Tag(TagArg::Clicked)),
        ButtonBinding::new(TagBar, MODKEY, Button3, Action::ToggleTag(TagArg::Clicked)),
    ]
}

pub fn options() -> Options {
    Options::default()
}
