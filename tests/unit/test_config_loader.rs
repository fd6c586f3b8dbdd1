//! Loading configuration overrides from TOML files

use std::fs;
use tagwm::{
    config::{Config, ConfigError, ConfigLoader},
    models::{
        action::{Action, Scratchpad},
        input::ModMask,
        layout::Arrange,
    },
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_file_overrides_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r##"
[options]
border_px = 2
gap_px = 10
show_systray = false

[colors.norm]
fg = "#bbbbbb"
bg = "#222222"
border = "#444444"

[colors.sel]
fg = "#eeeeee"
bg = "#005577"
border = "#005577"

[[layouts]]
symbol = "[]="
arrange = "tile"

[[layouts]]
symbol = "><>"

[[keys]]
modifiers = "Mod1+Shift"
key = "Return"
action = { kind = "spawn", arg = ["st"] }

[[keys]]
modifiers = "Mod1"
key = "grave"
action = { kind = "toggle_scratch", arg = { key = "s", command = ["st", "-t", "scratchpad"] } }

[[keys]]
modifiers = "Mod1+Shift"
key = "q"
action = { kind = "quit" }

[[buttons]]
click = "lt_symbol"
modifiers = "None"
button = 1
action = { kind = "set_layout", arg = "toggle" }
"##,
    );

    let mut loader = ConfigLoader::new();
    let config = loader.load_file(&path).unwrap();

    assert_eq!(config.options().border_px, 2);
    assert_eq!(config.options().gap_px, 10);
    assert!(!config.options().show_systray);
    assert_eq!(config.options().snap, 32);
    assert_eq!(config.colors.sel.bg.as_str(), "#005577");
    assert_eq!(config.layouts().len(), 2);
    assert_eq!(config.default_layout().unwrap().arrange, Some(Arrange::Tile));
    assert!(config.layouts()[1].is_floating());

    assert_eq!(config.keys().len(), 3);
    assert_eq!(config.keys()[0].modifiers, ModMask::MOD1 | ModMask::SHIFT);
    assert_eq!(
        config.keys()[1].action,
        Action::ToggleScratch(Scratchpad::new(
            's',
            tagwm::models::command::Command::new(["st", "-t", "scratchpad"])
        ))
    );
    assert_eq!(config.keys()[2].action, Action::Quit);
    assert_eq!(config.buttons().len(), 1);

    // untouched sections keep the built-in tables
    assert_eq!(config.rules(), Config::builtin().rules());
    assert_eq!(config.tags(), Config::builtin().tags());
}

#[test]
fn save_then_load_preserves_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::builtin().clone();
    config.options.m_fact = 0.6;
    config.rules.truncate(3);

    ConfigLoader::save_file(&config, &path).unwrap();
    let mut loader = ConfigLoader::new();
    let reloaded = loader.load_file(&path).unwrap();

    assert_eq!(reloaded, config);
}

#[test]
fn unknown_modifier_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[keys]]
modifiers = "Hyper"
key = "a"
action = { kind = "zoom" }
"#,
    );

    let mut loader = ConfigLoader::new();
    assert!(matches!(loader.load_file(&path), Err(ConfigError::TomlError(_))));
}

#[test]
fn duplicate_chords_are_rejected() {
    let mut loader = ConfigLoader::new();
    let result = loader.load_str(
        r#"
[[keys]]
modifiers = "Mod4"
key = "m"
action = { kind = "zoom" }

[[keys]]
modifiers = "Mod4"
key = "m"
action = { kind = "set_layout", arg = { index = 0 } }
"#,
    );

    match result {
        Err(ConfigError::ValidationError(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].rule, "duplicate_key_binding");
        }
        other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn warnings_do_not_block_loading() {
    let mut loader = ConfigLoader::new();
    let config = loader
        .load_str(
            r#"
[[rules]]
class = "mpv"
floating = true
geometry = { x = 0, y = 0, width = 640, height = 360 }
float_border_px = 1

[[rules]]
class = "mpv"
title = "webcam"
geometry = { x = 0, y = 0, width = 320, height = 240 }
float_border_px = 1
"#,
        )
        .unwrap();

    assert_eq!(config.rules().len(), 2);
    assert!(loader.warnings().iter().any(|w| w.rule == "shadowed_rule"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::new();
    let result = loader.load_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn shorter_tag_table_keeps_builtin_sections_loadable() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
tags = ["web", "code", "chat", "mail"]

[[rules]]
class = "mpv"
floating = true
"#,
    );

    let mut loader = ConfigLoader::new();
    let config = loader.load_file(&path).unwrap();

    assert_eq!(config.tag_count(), 4);
    assert_eq!(config.rules()[0].geometry, config.options().default_geometry);
    assert_eq!(config.keys().len(), 48 + 4 * 4 + 1);
    assert!(config.keys().iter().all(|k| k.key.as_str() != "5"));
}
