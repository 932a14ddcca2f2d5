//! Mask configuration persistence
//!
//! Stored in `~/.config/inputmask/config.yaml`:
//!
//! ```yaml
//! placeholder: "_"
//! masks:
//!   phone: "+1 (000) 000-0000"
//!   date: "00/00/0000"
//! rules:
//!   H: { one_of: "0123456789abcdefABCDEF" }
//!   D: { class: digit }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mask::{CharClass, CharRule, RuleTable, DEFAULT_PLACEHOLDER, ESCAPE_CHAR};

/// A custom glyph definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleConfig {
    /// One of the built-in character classes
    Class { class: CharClass },
    /// An explicit set of accepted characters
    OneOf { one_of: String },
}

impl RuleConfig {
    pub fn to_rule(&self) -> CharRule {
        match self {
            RuleConfig::Class { class } => CharRule::Class(*class),
            RuleConfig::OneOf { one_of } => CharRule::one_of(one_of),
        }
    }
}

/// Mask settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Glyph shown for unfilled slots
    #[serde(default = "default_placeholder")]
    pub placeholder: char,

    /// Named mask patterns
    #[serde(default)]
    pub masks: BTreeMap<String, String>,

    /// Extra pattern glyphs, added to (or overriding) the built-ins
    #[serde(default)]
    pub rules: BTreeMap<char, RuleConfig>,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            masks: BTreeMap::new(),
            rules: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoConfigDir,
    IoError(String),
    ParseError(String),
    ReservedGlyph(char),
    UnknownPreset(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ReservedGlyph(c) => write!(f, "Glyph {:?} is reserved", c),
            ConfigError::UnknownPreset(name) => write!(f, "Unknown mask preset: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: MaskConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if config.placeholder == ESCAPE_CHAR {
            return Err(ConfigError::ReservedGlyph(ESCAPE_CHAR));
        }
        if config.rules.contains_key(&ESCAPE_CHAR) {
            return Err(ConfigError::ReservedGlyph(ESCAPE_CHAR));
        }

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, self.to_yaml()?).map_err(|e| {
            ConfigError::IoError(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Built-in glyphs plus the configured ones
    pub fn rule_table(&self) -> RuleTable {
        self.rules
            .iter()
            .fold(RuleTable::builtin(), |table, (&glyph, rule)| {
                table.with_rule(glyph, rule.to_rule())
            })
    }

    /// Look up a named mask
    pub fn preset(&self, name: &str) -> Result<&str, ConfigError> {
        self.masks
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }
}
