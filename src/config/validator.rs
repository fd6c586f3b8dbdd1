use super::Config;
use crate::models::{
    action::{Action, LayoutArg, TagArg},
    binding::{ButtonBinding, KeyBinding},
    color_scheme::Scheme,
    layout::LayoutDescriptor,
    options::Options,
    tag::{TagMask, MAX_TAGS},
    window_rule::{Rule, WindowRuleError},
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationRule {
    pub name: &'static str,
    pub description: &'static str,
    pub severity: ValidationSeverity,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationSeverity::Error => write!(f, "error"),
            ValidationSeverity::Warning => write!(f, "warning"),
            ValidationSeverity::Info => write!(f, "info"),
        }
    }
}

/// Table entry a finding is about
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "table", content = "index", rename_all = "snake_case")]
pub enum ValidationTarget {
    Options,
    Tags,
    Color(Scheme),
    Layout(usize),
    Rule(usize),
    Key(usize),
    Button(usize),
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationTarget::Options => write!(f, "options"),
            ValidationTarget::Tags => write!(f, "tags"),
            ValidationTarget::Color(scheme) => write!(f, "colors.{}", scheme),
            ValidationTarget::Layout(i) => write!(f, "layouts[{}]", i),
            ValidationTarget::Rule(i) => write!(f, "rules[{}]", i),
            ValidationTarget::Key(i) => write!(f, "keys[{}]", i),
            ValidationTarget::Button(i) => write!(f, "buttons[{}]", i),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationFinding {
    pub rule: &'static str,
    pub severity: ValidationSeverity,
    pub message: String,
    pub target: ValidationTarget,
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({}): {}", self.severity, self.target, self.rule, self.message)
    }
}

const RULES: &[ValidationRule] = &[
    ValidationRule {
        name: "duplicate_key_binding",
        description: "Each modifier and key pair may only be bound once",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "duplicate_button_binding",
        description: "Each click context, modifier and button may only be bound once",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_rule",
        description: "Rule patterns must be non-empty, tag masks within the tag table, geometry positive",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "shadowed_rule",
        description: "Rule can never win because an earlier rule matches every window it matches",
        severity: ValidationSeverity::Warning,
    },
    ValidationRule {
        name: "wildcard_rule",
        description: "Rule without any pattern matches every window",
        severity: ValidationSeverity::Info,
    },
    ValidationRule {
        name: "duplicate_scratch_key",
        description: "Scratchpad keys must identify a single rule",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "unknown_scratch_key",
        description: "Scratchpad toggles should refer to a rule carrying the same key",
        severity: ValidationSeverity::Warning,
    },
    ValidationRule {
        name: "empty_layout_symbol",
        description: "Layout symbols are shown in the bar and must not be empty",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "empty_layout_table",
        description: "At least one layout is required, the first is the default",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "layout_index_out_of_range",
        description: "Layout switches must point into the layout table",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_color",
        description: "Colors must be #rrggbb",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "empty_command",
        description: "Spawned commands need a program",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "tag_mask_out_of_range",
        description: "Tag actions must address declared tags",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_tag_table",
        description: "Between 1 and 31 non-empty tag names are required",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_m_fact",
        description: "Master area fraction must lie within [0.05, 0.95]",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_n_master",
        description: "Master client count cannot be negative",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "invalid_default_geometry",
        description: "Default floating geometry must have positive width and height",
        severity: ValidationSeverity::Error,
    },
    ValidationRule {
        name: "no_fonts",
        description: "The bar needs at least one font",
        severity: ValidationSeverity::Warning,
    },
];

/// Checks the data-shape invariants of a [`Config`]
pub struct ConfigValidator {
    rules: &'static [ValidationRule],
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        self.rules
    }

    pub fn validate(&self, config: &Config) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        results.extend(self.validate_tags(&config.tags));
        results.extend(self.validate_options(&config.options));
        results.extend(self.validate_colors(config));
        results.extend(self.validate_layouts(&config.layouts));
        results.extend(self.validate_rules(&config.rules, config.tag_count()));
        results.extend(self.validate_keys(&config.keys, config));
        results.extend(self.validate_buttons(&config.buttons, config));
        results.extend(self.validate_scratchpads(config));

        results
    }

    pub fn has_errors(findings: &[ValidationFinding]) -> bool {
        findings.iter().any(|f| f.severity == ValidationSeverity::Error)
    }

    fn finding(&self, rule: &'static str, target: ValidationTarget, message: String) -> ValidationFinding {
        let severity = self
            .rules
            .iter()
            .find(|r| r.name == rule)
            .map(|r| r.severity)
            .unwrap_or(ValidationSeverity::Error);

        ValidationFinding {
            rule,
            severity,
            message,
            target,
        }
    }

    pub fn validate_tags(&self, tags: &[String]) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        if tags.is_empty() || tags.len() > MAX_TAGS {
            results.push(self.finding(
                "invalid_tag_table",
                ValidationTarget::Tags,
                format!("{} tags declared, expected 1 to {}", tags.len(), MAX_TAGS),
            ));
        }

        if tags.iter().any(|t| t.is_empty()) {
            results.push(self.finding(
                "invalid_tag_table",
                ValidationTarget::Tags,
                "Tag names cannot be empty".to_string(),
            ));
        }

        results
    }

    pub fn validate_options(&self, options: &Options) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        if !(Options::M_FACT_MIN..=Options::M_FACT_MAX).contains(&options.m_fact) {
            results.push(self.finding(
                "invalid_m_fact",
                ValidationTarget::Options,
                format!(
                    "m_fact {} must be between {} and {}",
                    options.m_fact,
                    Options::M_FACT_MIN,
                    Options::M_FACT_MAX
                ),
            ));
        }

        if options.n_master < 0 {
            results.push(self.finding(
                "invalid_n_master",
                ValidationTarget::Options,
                format!("n_master {} cannot be negative", options.n_master),
            ));
        }

        if options.default_geometry.width == 0 || options.default_geometry.height == 0 {
            results.push(self.finding(
                "invalid_default_geometry",
                ValidationTarget::Options,
                "Default floating geometry has a zero dimension".to_string(),
            ));
        }

        if options.fonts.is_empty() {
            results.push(self.finding(
                "no_fonts",
                ValidationTarget::Options,
                "No bar font configured".to_string(),
            ));
        }

        results
    }

    fn validate_colors(&self, config: &Config) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        for (scheme, colors) in config.colors.iter() {
            for (slot, color) in colors.colors() {
                if let Err(e) = color.validate() {
                    results.push(self.finding(
                        "invalid_color",
                        ValidationTarget::Color(scheme),
                        format!("{}: {}", slot, e),
                    ));
                }
            }
        }

        results
    }

    pub fn validate_layouts(&self, layouts: &[LayoutDescriptor]) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        if layouts.is_empty() {
            results.push(self.finding(
                "empty_layout_table",
                ValidationTarget::Layout(0),
                "Layout table is empty".to_string(),
            ));
        }

        for (index, layout) in layouts.iter().enumerate() {
            if layout.symbol.trim().is_empty() {
                results.push(self.finding(
                    "empty_layout_symbol",
                    ValidationTarget::Layout(index),
                    "Layout symbol cannot be empty".to_string(),
                ));
            }
        }

        results
    }

    pub fn validate_rules(&self, rules: &[Rule], tag_count: usize) -> Vec<ValidationFinding> {
        let mut results = Vec::new();
        let mut scratch_keys: HashMap<char, usize> = HashMap::new();

        for (index, rule) in rules.iter().enumerate() {
            if let Err(e) = rule.validate(tag_count) {
                let message = match e {
                    WindowRuleError::TagMaskOutOfRange(..) => format!("{} ({})", e, rule.pattern_summary()),
                    _ => e.to_string(),
                };
                results.push(self.finding("invalid_rule", ValidationTarget::Rule(index), message));
            }

            if rule.is_wildcard() {
                results.push(self.finding(
                    "wildcard_rule",
                    ValidationTarget::Rule(index),
                    "Rule has no pattern and applies to every window".to_string(),
                ));
            }

            if let Some(earlier) = rules[..index].iter().position(|e| e.shadows(rule)) {
                results.push(self.finding(
                    "shadowed_rule",
                    ValidationTarget::Rule(index),
                    format!(
                        "Rule ({}) is shadowed by rules[{}] ({})",
                        rule.pattern_summary(),
                        earlier,
                        rules[earlier].pattern_summary()
                    ),
                ));
            }

            if let Some(key) = rule.scratch_key {
                if let Some(first) = scratch_keys.insert(key, index) {
                    results.push(self.finding(
                        "duplicate_scratch_key",
                        ValidationTarget::Rule(index),
                        format!("Scratch key '{}' already used by rules[{}]", key, first),
                    ));
                }
            }
        }

        results
    }

    pub fn validate_keys(&self, keys: &[KeyBinding], config: &Config) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        for (index, binding) in keys.iter().enumerate() {
            if let Some(first) = keys[..index].iter().position(|k| k.conflicts_with(binding)) {
                results.push(self.finding(
                    "duplicate_key_binding",
                    ValidationTarget::Key(index),
                    format!("{} is already bound by keys[{}]", binding.chord(), first),
                ));
            }

            results.extend(self.validate_action(&binding.action, ValidationTarget::Key(index), config));
        }

        results
    }

    pub fn validate_buttons(&self, buttons: &[ButtonBinding], config: &Config) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        for (index, binding) in buttons.iter().enumerate() {
            if let Some(first) = buttons[..index].iter().position(|b| b.conflicts_with(binding)) {
                results.push(self.finding(
                    "duplicate_button_binding",
                    ValidationTarget::Button(index),
                    format!(
                        "{} {} with {} is already bound by buttons[{}]",
                        binding.click, binding.button, binding.modifiers, first
                    ),
                ));
            }

            results.extend(self.validate_action(&binding.action, ValidationTarget::Button(index), config));
        }

        results
    }

    fn validate_action(&self, action: &Action, target: ValidationTarget, config: &Config) -> Vec<ValidationFinding> {
        let mut results = Vec::new();

        if let Some(command) = action.command() {
            if command.is_empty() {
                results.push(self.finding(
                    "empty_command",
                    target,
                    format!("{} has no program to run", action.name()),
                ));
            }
        }

        if let Action::SetLayout(LayoutArg::Index(i)) = action {
            if *i >= config.layouts.len() {
                results.push(self.finding(
                    "layout_index_out_of_range",
                    target,
                    format!("Layout {} does not exist, {} layouts declared", i, config.layouts.len()),
                ));
            }
        }

        if let Some(TagArg::Mask(mask)) = action.tag_arg() {
            let all = mask == TagMask::ALL;
            if !all && (mask.is_empty() || !mask.fits(config.tag_count())) {
                results.push(self.finding(
                    "tag_mask_out_of_range",
                    target,
                    format!("{} addresses tags outside the {} declared", action, config.tag_count()),
                ));
            }
        }

        results
    }

    fn validate_scratchpads(&self, config: &Config) -> Vec<ValidationFinding> {
        let known: HashSet<char> = config.rules.iter().filter_map(|r| r.scratch_key).collect();
        let mut results = Vec::new();

        let key_actions = config
            .keys
            .iter()
            .enumerate()
            .map(|(i, b)| (ValidationTarget::Key(i), &b.action));
        let button_actions = config
            .buttons
            .iter()
            .enumerate()
            .map(|(i, b)| (ValidationTarget::Button(i), &b.action));

        for (target, action) in key_actions.chain(button_actions) {
            if let Action::ToggleScratch(pad) = action {
                if !known.contains(&pad.key) {
                    results.push(self.finding(
                        "unknown_scratch_key",
                        target,
                        format!("No rule carries scratch key '{}'", pad.key),
                    ));
                }
            }
        }

        results
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
