use super::validator::{ConfigValidator, ValidationFinding, ValidationSeverity};
use super::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
    #[error("Validation failed with {} error(s): {}", .0.len(), first_message(.0))]
    ValidationError(Vec<ValidationFinding>),
}

fn first_message(findings: &[ValidationFinding]) -> String {
    findings
        .first()
        .map(|f| f.message.clone())
        .unwrap_or_default()
}

/// Location of the user's override file, `$XDG_CONFIG_HOME/tagwm/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagwm").join("config.toml"))
}

/// One-shot loader for TOML overrides of the built-in tables
///
/// Every top-level section (`options`, `tags`, `colors`, `layouts`, `rules`,
/// `keys`, `buttons`) is optional; a missing section keeps the built-in table.
/// Within `options` each field falls back individually.
pub struct ConfigLoader {
    validator: ConfigValidator,
    warnings: Vec<ValidationFinding>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            validator: ConfigValidator::new(),
            warnings: Vec::new(),
        }
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading configuration file");
        let content = std::fs::read_to_string(path)?;
        let config = self.load_str(&content)?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn load_str(&mut self, content: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(content)?;
        self.check(&config)?;
        Ok(config)
    }

    /// Load `path` if given, else the default path if it exists, else the built-in tables
    pub fn load_or_builtin(&mut self, path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return self.load_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => self.load_file(path),
            _ => {
                debug!("No configuration file found, using built-in tables");
                Ok(Config::builtin().clone())
            }
        }
    }

    pub fn to_toml_string(config: &Config) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(config)?)
    }

    pub fn save_file<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, Self::to_toml_string(config)?)?;
        info!(path = %path.display(), "Configuration written");
        Ok(())
    }

    /// Warning and info findings of the last successful load
    pub fn warnings(&self) -> &[ValidationFinding] {
        &self.warnings
    }

    fn check(&mut self, config: &Config) -> Result<(), ConfigError> {
        let (errors, rest): (Vec<_>, Vec<_>) = self
            .validator
            .validate(config)
            .into_iter()
            .partition(|f| f.severity == ValidationSeverity::Error);

        if !errors.is_empty() {
            return Err(ConfigError::ValidationError(errors));
        }

        for finding in rest.iter().filter(|f| f.severity == ValidationSeverity::Warning) {
            warn!(rule = finding.rule, "{}", finding.message);
        }
        self.warnings = rest;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::models::{action::TagArg, tag::TagMask};

    #[test]
    fn test_empty_file_yields_builtin() {
        let mut loader = ConfigLoader::new();
        let config = loader.load_str("").unwrap();
        assert_eq!(&config, Config::builtin());
    }

    #[test]
    fn test_section_override() {
        let mut loader = ConfigLoader::new();
        let config = loader
            .load_str(
                r#"
tags = ["web", "code", "chat"]

[options]
gap_px = 8

[[rules]]
class = "Firefox"
tags = 1
geometry = { x = 0, y = 0, width = 640, height = 480 }
float_border_px = 2
"#,
            )
            .unwrap();

        assert_eq!(config.tags(), ["web", "code", "chat"]);
        assert_eq!(config.options().gap_px, 8);
        assert_eq!(config.options().snap, 32);
        assert_eq!(config.rules().len(), 1);
        assert_eq!(config.rules()[0].tags, TagMask(1));
        assert_eq!(config.rules()[0].monitor, -1);
        assert_eq!(config.keys(), defaults::keys_for_tags(3));
        assert_eq!(config.buttons(), Config::builtin().buttons());
    }

    #[test]
    fn test_fewer_tags_keep_builtin_tables_valid() {
        let mut loader = ConfigLoader::new();
        let config = loader.load_str(r#"tags = ["web", "code", "chat"]"#).unwrap();

        assert_eq!(config.tag_count(), 3);
        assert_eq!(config.rules().len(), Config::builtin().rules().len());
        assert!(config.rules().iter().all(|r| r.tags.fits(3)));
        assert_eq!(config.rules()[2].tags, TagMask(3));
        assert!(config.rules()[0].tags.is_empty());

        let tag_keys: Vec<_> = config
            .keys()
            .iter()
            .filter_map(|k| k.action.tag_arg())
            .filter_map(|arg| match arg {
                TagArg::Mask(mask) if mask != TagMask::ALL => Some(mask),
                _ => None,
            })
            .collect();
        assert_eq!(tag_keys.len(), 3 * 4);
        assert!(tag_keys.iter().all(|mask| mask.fits(3)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut loader = ConfigLoader::new();
        let result = loader.load_str(
            r##"
[[layouts]]
symbol = ""
arrange = "tile"
"##,
        );

        match result {
            Err(ConfigError::ValidationError(errors)) => {
                assert!(errors.iter().any(|e| e.rule == "empty_layout_symbol"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_syntax_error() {
        let mut loader = ConfigLoader::new();
        assert!(matches!(
            loader.load_str("options = ["),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_builtin_survives_toml_round_trip() {
        let text = ConfigLoader::to_toml_string(Config::builtin()).unwrap();
        let mut loader = ConfigLoader::new();
        let reloaded = loader.load_str(&text).unwrap();
        assert_eq!(&reloaded, Config::builtin());
    }
}
