//! Configuration management for `logmask-core`.
//!
//! This module defines the declarative data structures for masking rules and
//! handles their JSON serialization. Deserialization is deliberately lenient:
//! missing fields, `null` rule entries and unknown flag names all survive
//! parsing so that [`crate::validators::validate`] can report every defect at
//! once instead of the parser stopping at the first one.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::MaskError;

/// The only rule-file schema version this library understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// A regex flag that can be attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFlag {
    /// Match letters regardless of case.
    CaseInsensitive,
}

impl RuleFlag {
    /// Every flag the library knows about.
    pub const ALL: &'static [RuleFlag] = &[RuleFlag::CaseInsensitive];

    /// The name used for this flag in rule files.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleFlag::CaseInsensitive => "CASE_INSENSITIVE",
        }
    }

    /// Resolves a flag name as written in a rule file. Names are exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.as_str() == name)
    }
}

impl fmt::Display for RuleFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declarative masking rule, one-to-one with an entry of the
/// `rules` array in a rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskRuleConfig {
    /// Unique identifier, used as the key for match counts (e.g. "email").
    pub id: Option<String>,
    /// Human-readable display name.
    pub name: Option<String>,
    /// Absent means enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The regex pattern source.
    pub pattern: Option<String>,
    /// Replacement template. `$1` / `${name}` reference capture groups and
    /// `$$` produces a literal `$`. May be empty.
    pub replacement: Option<String>,
    /// Flag names, e.g. `["CASE_INSENSITIVE"]`.
    pub flags: Vec<String>,
}

impl MaskRuleConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            enabled: None,
            pattern: Some(pattern.into()),
            replacement: Some(replacement.into()),
            flags: Vec::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_flag(mut self, flag: RuleFlag) -> Self {
        self.flags.push(flag.as_str().to_string());
        self
    }

    /// The effective enabled state: an omitted `enabled` counts as `true`.
    pub fn is_enabled_effective(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// The known flags of this rule. Unknown names are dropped here; the
    /// validator is responsible for rejecting them.
    pub fn known_flags(&self) -> Vec<RuleFlag> {
        self.flags
            .iter()
            .filter_map(|name| RuleFlag::from_name(name))
            .collect()
    }
}

/// The whole rule file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MaskRulesConfig {
    /// Schema version. A missing field reads as `0` and fails validation.
    #[serde(default)]
    pub version: u32,
    /// Rules in application order. `null` entries are kept as `None`.
    #[serde(default)]
    pub rules: Vec<Option<MaskRuleConfig>>,
}

impl Default for MaskRulesConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            rules: Vec::new(),
        }
    }
}

impl MaskRulesConfig {
    /// Builds a config at the supported version from a list of rules.
    pub fn new(rules: impl IntoIterator<Item = MaskRuleConfig>) -> Self {
        Self {
            version: SUPPORTED_VERSION,
            rules: rules.into_iter().map(Some).collect(),
        }
    }

    /// Iterates over the non-null rules, in order.
    pub fn iter_rules(&self) -> impl Iterator<Item = &MaskRuleConfig> {
        self.rules.iter().flatten()
    }

    /// Loads a rule file from disk. The result is not validated.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, MaskError> {
        let path = path.as_ref();
        info!("Loading masking rules from: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| MaskError::io(path, e))?;
        let config: MaskRulesConfig =
            serde_json::from_str(&text).map_err(|source| MaskError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            "Loaded {} rule entries from file {}.",
            config.rules.len(),
            path.display()
        );
        Ok(config)
    }

    /// Writes the rule set as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MaskError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MaskError::io(parent, e))?;
        }
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json).map_err(|e| MaskError::io(path, e))?;
        debug!("Saved {} rule entries to {}.", self.rules.len(), path.display());
        Ok(())
    }

    /// Loads the built-in rule set embedded in the library.
    pub fn load_default_rules() -> Result<Self, MaskError> {
        debug!("Loading default rules from embedded string...");
        let default_json = include_str!("../config/default_rules.json");
        let config: MaskRulesConfig =
            serde_json::from_str(default_json).map_err(|source| MaskError::ConfigParse {
                path: "<embedded default_rules.json>".into(),
                source,
            })?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }
}
