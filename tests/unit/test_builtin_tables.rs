//! Data-shape invariants of the built-in configuration tables

use std::collections::HashSet;
use tagwm::{
    config::{Config, ConfigValidator, ValidationSeverity},
    models::{
        action::{Action, GapsArg, LayoutArg, TagArg},
        input::{KeySym, ModMask},
        tag::TagMask,
        window_rule::{FloatGeometry, WindowProperties},
    },
    services::RuleEngine,
};

#[test]
fn key_chords_are_pairwise_distinct() {
    let config = Config::builtin();
    let mut seen = HashSet::new();

    for binding in config.keys() {
        assert!(
            seen.insert((binding.modifiers, binding.key.clone())),
            "{} is bound more than once",
            binding.chord()
        );
    }
}

#[test]
fn button_bindings_are_pairwise_distinct() {
    let config = Config::builtin();
    let mut seen = HashSet::new();

    for binding in config.buttons() {
        assert!(seen.insert((binding.click, binding.modifiers, binding.button)));
    }
}

#[test]
fn rule_tag_masks_fit_the_tag_table() {
    let config = Config::builtin();
    assert_eq!(config.tag_count(), 9);

    for rule in config.rules() {
        assert!(rule.tags.bits() < 1 << 9, "{} has mask {}", rule.pattern_summary(), rule.tags);
    }
}

#[test]
fn layout_symbols_are_not_empty() {
    for layout in Config::builtin().layouts() {
        assert!(!layout.symbol.is_empty());
    }
    assert!(Config::builtin().layouts()[1].is_floating());
}

#[test]
fn firefox_goes_to_tags_one_and_two() {
    let engine = RuleEngine::new(Config::builtin());
    let outcome = engine.apply(&WindowProperties::new("Firefox", "Navigator", "Mozilla Firefox"));

    assert_eq!(outcome.tags, TagMask(3));
    assert!(!outcome.floating);
    assert_eq!(outcome.monitor, -1);
    assert_eq!(outcome.geometry, FloatGeometry::new(550, 250, 800, 600));
    assert_eq!(outcome.float_border_px, 5);
}

#[test]
fn tk_windows_float() {
    let engine = RuleEngine::new(Config::builtin());
    let outcome = engine.apply(&WindowProperties::new("Tk", "tk", "demo"));

    assert!(outcome.floating);
    assert!(outcome.tags.is_empty());
}

#[test]
fn every_tag_has_four_bindings() {
    let config = Config::builtin();
    let modkey = ModMask::MOD4;

    for tag in 0..9 {
        let key = KeySym::new((tag + 1).to_string()).unwrap();
        let mask = TagArg::Mask(TagMask::single(tag));
        let bound: Vec<_> = config.keys().iter().filter(|b| b.key == key).collect();

        assert_eq!(bound.len(), 4, "tag {}", tag + 1);
        assert!(bound.iter().any(|b| b.modifiers == modkey && b.action == Action::View(mask)));
        assert!(bound
            .iter()
            .any(|b| b.modifiers == ModMask::MOD1 && b.action == Action::ToggleView(mask)));
        assert!(bound
            .iter()
            .any(|b| b.modifiers == modkey | ModMask::SHIFT && b.action == Action::Tag(mask)));
        assert!(bound
            .iter()
            .any(|b| b.modifiers == modkey | ModMask::CONTROL && b.action == Action::ToggleTag(mask)));
    }
}

#[test]
fn selected_bindings() {
    let config = Config::builtin();
    let find = |mods: ModMask, key: &str| {
        config
            .keys()
            .iter()
            .find(|b| b.modifiers == mods && b.key.as_str() == key)
            .map(|b| b.action.clone())
    };

    assert_eq!(
        find(ModMask::MOD4 | ModMask::SHIFT | ModMask::CONTROL, "q"),
        Some(Action::Quit)
    );
    assert_eq!(find(ModMask::MOD4, "m"), Some(Action::SetLayout(LayoutArg::Index(2))));
    assert_eq!(find(ModMask::MOD4, "Tab"), Some(Action::View(TagArg::Previous)));
    assert_eq!(find(ModMask::MOD4, "0"), Some(Action::View(TagArg::Mask(TagMask::ALL))));
    assert_eq!(
        find(ModMask::MOD4 | ModMask::SHIFT, "equal"),
        Some(Action::SetGaps(GapsArg::Reset))
    );
    assert_eq!(find(ModMask::MOD4, "h"), Some(Action::SetMFact(-0.05)));

    match find(ModMask::NONE, "XF86AudioRaiseVolume") {
        Some(Action::Spawn(cmd)) => assert_eq!(cmd.argv(), ["/bin/bash", "-c", "pamixer -i 5"]),
        other => panic!("unexpected binding: {:?}", other),
    }
}

#[test]
fn builtin_reads_are_identical() {
    let first = Config::builtin().clone();
    let second = Config::builtin();
    assert_eq!(&first, second);
    assert_eq!(Config::default(), first);
}

#[test]
fn builtin_validates_without_errors() {
    let findings = ConfigValidator::new().validate(Config::builtin());
    let errors: Vec<_> = findings
        .iter()
        .filter(|f| f.severity == ValidationSeverity::Error)
        .collect();
    assert!(errors.is_empty(), "{:#?}", errors);
}
