//! Contract between the binding tables and the core's action handler

use tagwm::{
    config::Config,
    models::{
        action::{Action, LayoutArg, TagArg},
        input::{Button, ClickContext, KeySym, ModMask},
        tag::TagMask,
    },
    services::{ActionHandler, BindingDispatcher},
    Result,
};

/// Stand-in core that records actions and stops on quit
#[derive(Default)]
struct RecordingCore {
    actions: Vec<Action>,
    running: bool,
}

impl ActionHandler for RecordingCore {
    fn handle(&mut self, action: &Action) -> Result<()> {
        if *action == Action::Quit {
            self.running = false;
        }
        self.actions.push(action.clone());
        Ok(())
    }
}

fn key(name: &str) -> KeySym {
    KeySym::new(name).unwrap()
}

#[test]
fn quit_chord_stops_the_core() {
    let config = Config::builtin();
    let mut dispatcher = BindingDispatcher::new(config);
    let mut core = RecordingCore {
        running: true,
        ..Default::default()
    };

    dispatcher
        .dispatch_key(ModMask::MOD4 | ModMask::SHIFT | ModMask::CONTROL, &key("q"), &mut core)
        .unwrap();

    assert!(!core.running);
    assert_eq!(core.actions, vec![Action::Quit]);
}

#[test]
fn numlock_and_capslock_do_not_change_bindings() {
    let config = Config::builtin();
    let mut dispatcher = BindingDispatcher::new(config);
    let mut core = RecordingCore::default();

    for extra in [ModMask::NONE, ModMask::MOD2, ModMask::LOCK, ModMask::MOD2 | ModMask::LOCK] {
        dispatcher
            .dispatch_key(ModMask::MOD4 | extra, &key("3"), &mut core)
            .unwrap();
    }

    assert_eq!(core.actions.len(), 4);
    assert!(core
        .actions
        .iter()
        .all(|a| *a == Action::View(TagArg::Mask(TagMask(4)))));
}

#[test]
fn event_sequence_is_dispatched_in_order() {
    let config = Config::builtin();
    let mut dispatcher = BindingDispatcher::new(config);
    let mut core = RecordingCore::default();

    dispatcher.dispatch_key(ModMask::MOD4, &key("m"), &mut core).unwrap();
    dispatcher.dispatch_key(ModMask::MOD4, &key("j"), &mut core).unwrap();
    dispatcher.dispatch_key(ModMask::MOD4, &key("w"), &mut core).unwrap();
    dispatcher
        .dispatch_button(ClickContext::TagBar, ModMask::NONE, Button::Button1, Some(0), &mut core)
        .unwrap();
    dispatcher
        .dispatch_button(ClickContext::ClientWin, ModMask::MOD4, Button::Button3, None, &mut core)
        .unwrap();

    assert_eq!(
        core.actions,
        vec![
            Action::SetLayout(LayoutArg::Index(2)),
            Action::FocusStackVisible(1),
            Action::View(TagArg::Mask(TagMask(1))),
            Action::ResizeMouse,
        ]
    );

    let metrics = dispatcher.metrics();
    assert_eq!(metrics.key_events, 3);
    assert_eq!(metrics.button_events, 2);
    assert_eq!(metrics.actions_invoked, 4);
    assert_eq!(metrics.unmatched_events, 1);
}

#[test]
fn status_text_middle_click_spawns_terminal() {
    let config = Config::builtin();
    let mut dispatcher = BindingDispatcher::new(config);
    let mut core = RecordingCore::default();

    dispatcher
        .dispatch_button(ClickContext::StatusText, ModMask::NONE, Button::Button2, None, &mut core)
        .unwrap();

    match core.actions.as_slice() {
        [Action::Spawn(cmd)] => assert_eq!(cmd.program(), Some("/usr/bin/alacritty")),
        other => panic!("unexpected actions: {:?}", other),
    }
}

#[test]
fn tag_bar_clicks_stay_within_the_tag_table() {
    let config = Config::builtin();
    let mut dispatcher = BindingDispatcher::new(config);
    let mut core = RecordingCore::default();

    for clicked_tag in [Some(8), Some(9), Some(32), None] {
        dispatcher
            .dispatch_button(ClickContext::TagBar, ModMask::MOD4, Button::Button1, clicked_tag, &mut core)
            .unwrap();
    }

    assert_eq!(core.actions, vec![Action::Tag(TagArg::Mask(TagMask(1 << 8)))]);
    assert_eq!(dispatcher.metrics().unmatched_events, 3);
}
