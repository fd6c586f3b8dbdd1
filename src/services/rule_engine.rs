use crate::config::Config;
use crate::models::{
    options::Options,
    tag::TagMask,
    window_rule::{FloatGeometry, Rule, WindowProperties, ANY_MONITOR},
};
use serde::Serialize;
use tracing::debug;

/// Directives for a newly mapped window
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Empty means the window joins the monitor's current view
    pub tags: TagMask,
    pub floating: bool,
    pub monitor: i32,
    pub geometry: FloatGeometry,
    pub float_border_px: u32,
    pub scratch_key: Option<char>,
    /// Index of the rule that produced this outcome
    pub matched: Option<usize>,
}

/// First-match-wins application of the rule table
pub struct RuleEngine<'a> {
    rules: &'a [Rule],
    options: &'a Options,
}

impl<'a> RuleEngine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::from_tables(&config.rules, &config.options)
    }

    pub fn from_tables(rules: &'a [Rule], options: &'a Options) -> Self {
        Self { rules, options }
    }

    pub fn apply(&self, window: &WindowProperties) -> RuleOutcome {
        match self.rules.iter().position(|r| r.matches(window)) {
            Some(index) => {
                let rule = &self.rules[index];
                debug!(
                    class = %window.class,
                    instance = %window.instance,
                    title = %window.title,
                    rule = index,
                    tags = %rule.tags,
                    floating = rule.floating,
                    "Window rule applied"
                );
                RuleOutcome {
                    tags: rule.tags,
                    floating: rule.floating,
                    monitor: rule.monitor,
                    geometry: rule.geometry,
                    float_border_px: rule.float_border_px,
                    scratch_key: rule.scratch_key,
                    matched: Some(index),
                }
            }
            None => self.fallback(),
        }
    }

    /// Indices of every rule matching `window`, in table order
    pub fn matching_rules(&self, window: &WindowProperties) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(window))
            .map(|(i, _)| i)
            .collect()
    }

    /// Rule carrying the given scratchpad key
    pub fn scratchpad_rule(&self, key: char) -> Option<&'a Rule> {
        self.rules.iter().find(|r| r.scratch_key == Some(key))
    }

    fn fallback(&self) -> RuleOutcome {
        RuleOutcome {
            tags: TagMask::EMPTY,
            floating: false,
            monitor: ANY_MONITOR,
            geometry: self.options.default_geometry,
            float_border_px: self.options.border_px,
            scratch_key: None,
            matched: None,
        }
    }
}
