//! Command-line interface for tagwm
//!
//! Inspects the configuration tables the window manager core runs with:
//! listing tables, validating override files, dumping the effective
//! configuration and answering which rule or binding an event would hit.

use crate::{
    config::{default_config_path, Config, ConfigLoader, ConfigValidator, ValidationSeverity},
    models::{
        input::{KeySym, ModMask},
        window_rule::WindowProperties,
    },
    services::{BindingDispatcher, RuleEngine},
    Result, TagwmError,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// tagwm command-line interface
#[derive(Parser)]
#[command(name = "tagwm")]
#[command(about = "Configuration tables of a tag-based tiling window manager")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct TagwmCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (defaults to $XDG_CONFIG_HOME/tagwm/config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and use the built-in tables
    #[arg(long, global = true, conflicts_with = "config")]
    pub builtin: bool,

    /// Enable JSON output for machine-readable results
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one of the configuration tables
    Show {
        #[arg(value_enum)]
        table: Table,
    },

    /// Validate the configuration and report findings
    Check,

    /// Print the effective configuration as TOML
    Dump {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which rule a window would be placed by
    Match {
        #[arg(long, default_value = "")]
        class: String,
        #[arg(long, default_value = "")]
        instance: String,
        #[arg(long, default_value = "")]
        title: String,
    },

    /// Show which key bindings a chord triggers
    Lookup {
        /// Modifiers, e.g. "Mod4+Shift"
        #[arg(short, long, default_value = "None")]
        mods: String,
        /// Keysym name, e.g. "Return"
        #[arg(short, long)]
        key: String,
    },

    /// Print the default configuration file location
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Keys,
    Buttons,
    Rules,
    Layouts,
    Colors,
    Options,
    Tags,
}

/// Executes parsed CLI commands against a loaded configuration
pub struct TagwmCliExecutor {
    config: Config,
    json_output: bool,
}

impl TagwmCliExecutor {
    /// Load the configuration the CLI options point at
    pub fn from_cli(cli: &TagwmCli) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        let config = if cli.builtin {
            Config::builtin().clone()
        } else {
            if let Some(path) = &cli.config {
                if !path.exists() {
                    return Err(TagwmError::ConfigNotFound(path.display().to_string()).into());
                }
            }
            loader
                .load_or_builtin(cli.config.as_deref())
                .map_err(TagwmError::from)?
        };

        Ok(Self {
            config,
            json_output: cli.json,
        })
    }

    pub fn new(config: Config, json_output: bool) -> Self {
        Self { config, json_output }
    }

    pub fn execute(&self, command: &Commands) -> Result<()> {
        match command {
            Commands::Show { table } => self.show(*table),
            Commands::Check => self.check(),
            Commands::Dump { output } => self.dump(output.as_ref()),
            Commands::Match {
                class,
                instance,
                title,
            } => self.match_window(WindowProperties::new(class.as_str(), instance.as_str(), title.as_str())),
            Commands::Lookup { mods, key } => self.lookup(mods, key),
            Commands::Path => {
                match default_config_path() {
                    Some(path) => println!("{}", path.display()),
                    None => println!("No configuration directory available"),
                }
                Ok(())
            }
        }
    }

    fn show(&self, table: Table) -> Result<()> {
        debug!(?table, "Showing table");
        let config = &self.config;

        if self.json_output {
            let value = match table {
                Table::Keys => serde_json::to_value(&config.keys)?,
                Table::Buttons => serde_json::to_value(&config.buttons)?,
                Table::Rules => serde_json::to_value(&config.rules)?,
                Table::Layouts => serde_json::to_value(&config.layouts)?,
                Table::Colors => serde_json::to_value(&config.colors)?,
                Table::Options => serde_json::to_value(&config.options)?,
                Table::Tags => serde_json::to_value(&config.tags)?,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        match table {
            Table::Keys => {
                for (i, binding) in config.keys().iter().enumerate() {
                    println!("{:>3}  {}", i, binding);
                }
            }
            Table::Buttons => {
                for (i, binding) in config.buttons().iter().enumerate() {
                    println!("{:>3}  {}", i, binding);
                }
            }
            Table::Rules => {
                for (i, rule) in config.rules().iter().enumerate() {
                    let g = rule.geometry;
                    println!(
                        "{:>3}  {}  tags={} floating={} monitor={} geometry={}x{}+{}+{} border={}{}",
                        i,
                        rule.pattern_summary(),
                        rule.tags,
                        rule.floating,
                        rule.monitor,
                        g.width,
                        g.height,
                        g.x,
                        g.y,
                        rule.float_border_px,
                        rule.scratch_key
                            .map(|k| format!(" scratch='{}'", k))
                            .unwrap_or_default()
                    );
                }
            }
            Table::Layouts => {
                for (i, layout) in config.layouts().iter().enumerate() {
                    let marker = if i == 0 { " (default)" } else { "" };
                    println!("{:>3}  {}{}", i, layout, marker);
                }
            }
            Table::Colors => {
                for (scheme, colors) in config.colors.iter() {
                    println!(
                        "{:<5} fg={} bg={} border={}",
                        scheme, colors.fg, colors.bg, colors.border
                    );
                }
            }
            Table::Options => {
                let rendered = toml::to_string_pretty(config.options())?;
                print!("{}", rendered);
            }
            Table::Tags => {
                for (i, tag) in config.tags().iter().enumerate() {
                    println!("{:>3}  {}  mask={:#x}", i, tag, 1u32 << i);
                }
            }
        }

        Ok(())
    }

    fn check(&self) -> Result<()> {
        let findings = ConfigValidator::new().validate(&self.config);
        let errors = findings
            .iter()
            .filter(|f| f.severity == ValidationSeverity::Error)
            .count();

        if self.json_output {
            println!("{}", serde_json::to_string_pretty(&findings)?);
        } else if findings.is_empty() {
            println!("Configuration OK");
        } else {
            for finding in &findings {
                println!("{}", finding);
            }
            println!("{} finding(s), {} error(s)", findings.len(), errors);
        }

        if errors > 0 {
            anyhow::bail!("configuration has {} error(s)", errors);
        }
        Ok(())
    }

    fn dump(&self, output: Option<&PathBuf>) -> Result<()> {
        match output {
            Some(path) => {
                ConfigLoader::save_file(&self.config, path).map_err(TagwmError::from)?;
                info!(path = %path.display(), "Configuration dumped");
            }
            None => {
                let text = ConfigLoader::to_toml_string(&self.config).map_err(TagwmError::from)?;
                print!("{}", text);
            }
        }
        Ok(())
    }

    fn match_window(&self, window: WindowProperties) -> Result<()> {
        let engine = RuleEngine::new(&self.config);
        let outcome = engine.apply(&window);
        let all = engine.matching_rules(&window);

        if self.json_output {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "outcome": outcome,
                    "matching_rules": all,
                }))?
            );
            return Ok(());
        }

        match outcome.matched {
            Some(index) => println!("rules[{}] {}", index, self.config.rules()[index].pattern_summary()),
            None => println!("No rule matches; defaults apply"),
        }
        println!("  tags:     {}", outcome.tags);
        println!("  floating: {}", outcome.floating);
        println!("  monitor:  {}", outcome.monitor);
        println!(
            "  geometry: {}x{}+{}+{}",
            outcome.geometry.width, outcome.geometry.height, outcome.geometry.x, outcome.geometry.y
        );
        println!("  border:   {}", outcome.float_border_px);
        if let Some(key) = outcome.scratch_key {
            println!("  scratch:  '{}'", key);
        }
        if all.len() > 1 {
            println!("  also matched by rules {:?} (first match wins)", &all[1..]);
        }
        Ok(())
    }

    fn lookup(&self, mods: &str, key: &str) -> Result<()> {
        let state: ModMask = mods.parse().map_err(TagwmError::from)?;
        let key = KeySym::new(key).map_err(TagwmError::from)?;
        let dispatcher = BindingDispatcher::new(&self.config);
        let bindings: Vec<_> = dispatcher.lookup_key(state, &key).collect();

        if self.json_output {
            println!("{}", serde_json::to_string_pretty(&bindings)?);
        } else if bindings.is_empty() {
            println!("Nothing bound to {}+{}", state, key);
        } else {
            for binding in bindings {
                println!("{}", binding);
            }
        }
        Ok(())
    }
}
