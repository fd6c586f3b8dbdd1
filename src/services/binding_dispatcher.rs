use crate::config::Config;
use crate::models::{
    action::{Action, TagArg},
    binding::{ButtonBinding, KeyBinding},
    input::{Button, ClickContext, KeySym, ModMask},
    tag::{TagMask, MAX_TAGS},
};
use crate::Result;
use tracing::{debug, trace};

/// Implemented by the window manager core to carry out bound actions
#[cfg_attr(test, mockall::automock)]
pub trait ActionHandler {
    fn handle(&mut self, action: &Action) -> Result<()>;
}

/// Counters for dispatched input events
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatcherMetrics {
    pub key_events: u64,
    pub button_events: u64,
    pub actions_invoked: u64,
    pub unmatched_events: u64,
}

/// Linear-scan lookup of input events against the key and button tables
pub struct BindingDispatcher<'a> {
    keys: &'a [KeyBinding],
    buttons: &'a [ButtonBinding],
    numlock_mask: ModMask,
    tag_count: usize,
    metrics: DispatcherMetrics,
}

impl<'a> BindingDispatcher<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::from_tables(&config.keys, &config.buttons).with_tag_count(config.tag_count())
    }

    pub fn from_tables(keys: &'a [KeyBinding], buttons: &'a [ButtonBinding]) -> Self {
        Self {
            keys,
            buttons,
            numlock_mask: ModMask::MOD2,
            tag_count: MAX_TAGS,
            metrics: DispatcherMetrics::default(),
        }
    }

    /// Number of tags a tag-bar click may address
    pub fn with_tag_count(mut self, tag_count: usize) -> Self {
        self.tag_count = tag_count.min(MAX_TAGS);
        self
    }

    /// Modifier the X server reports NumLock under, Mod2 unless the keymap says otherwise
    pub fn with_numlock_mask(mut self, numlock_mask: ModMask) -> Self {
        self.numlock_mask = numlock_mask;
        self
    }

    /// Strip NumLock and CapsLock, keep Shift, Control and Mod1-Mod5
    pub fn clean_mask(&self, state: ModMask) -> ModMask {
        state
            .without(self.numlock_mask | ModMask::LOCK)
            .intersection(ModMask::RELEVANT)
    }

    /// Key bindings triggered by `state` and `key`, in table order
    pub fn lookup_key<'s>(&'s self, state: ModMask, key: &'s KeySym) -> impl Iterator<Item = &'a KeyBinding> + 's {
        let cleaned = self.clean_mask(state);
        self.keys
            .iter()
            .filter(move |b| b.key == *key && self.clean_mask(b.modifiers) == cleaned)
    }

    pub fn lookup_button(
        &self,
        click: ClickContext,
        state: ModMask,
        button: Button,
    ) -> impl Iterator<Item = &'a ButtonBinding> + '_ {
        let cleaned = self.clean_mask(state);
        self.buttons.iter().filter(move |b| {
            b.click == click && b.button == button && self.clean_mask(b.modifiers) == cleaned
        })
    }

    /// Invoke every binding matching the key event; returns how many fired
    pub fn dispatch_key<H>(&mut self, state: ModMask, key: &KeySym, handler: &mut H) -> Result<usize>
    where
        H: ActionHandler + ?Sized,
    {
        self.metrics.key_events += 1;
        let matched: Vec<&KeyBinding> = self.lookup_key(state, key).collect();

        if matched.is_empty() {
            self.metrics.unmatched_events += 1;
            trace!(state = %state, key = %key, "Unbound key event ignored");
            return Ok(0);
        }

        for binding in &matched {
            debug!(chord = %binding.chord(), action = %binding.action, "Key binding fired");
            handler.handle(&binding.action)?;
            self.metrics.actions_invoked += 1;
        }

        Ok(matched.len())
    }

    /// Invoke every binding matching the button event; returns how many fired
    ///
    /// A `clicked` tag argument is replaced by the mask of `clicked_tag`. Bindings
    /// needing it are skipped when the clicked tag is missing or not in the tag table.
    pub fn dispatch_button<H>(
        &mut self,
        click: ClickContext,
        state: ModMask,
        button: Button,
        clicked_tag: Option<usize>,
        handler: &mut H,
    ) -> Result<usize>
    where
        H: ActionHandler + ?Sized,
    {
        self.metrics.button_events += 1;
        let matched: Vec<&ButtonBinding> = self.lookup_button(click, state, button).collect();
        let clicked = clicked_tag.and_then(|tag| TagMask::checked_single(tag, self.tag_count));
        let mut fired = 0;

        for binding in &matched {
            let action = match (binding.action.tag_arg(), clicked) {
                (Some(TagArg::Clicked), Some(mask)) => binding.action.with_clicked_tag(mask),
                (Some(TagArg::Clicked), None) => {
                    trace!(binding = %binding, ?clicked_tag, "No clicked tag to resolve, binding skipped");
                    continue;
                }
                _ => binding.action.clone(),
            };
            debug!(binding = %binding, action = %action, "Button binding fired");
            handler.handle(&action)?;
            self.metrics.actions_invoked += 1;
            fired += 1;
        }

        if fired == 0 {
            self.metrics.unmatched_events += 1;
            trace!(click = %click, state = %state, button = %button, "Unbound button event ignored");
        }

        Ok(fired)
    }

    pub fn metrics(&self) -> &DispatcherMetrics {
        &self.metrics
    }
}
