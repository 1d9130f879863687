// File: logmask-core/src/validators.rs
//! Structural and regex-syntax validation of a masking rule set.
//!
//! Validation never stops at the first problem. Every defect across the whole
//! rule set is collected, so a caller can show one complete diagnostic.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashSet;

use crate::config::{MaskRulesConfig, RuleFlag, SUPPORTED_VERSION};
use crate::errors::MaskError;
use crate::sanitizers::compiler::build_regex;

/// Returns the value when it is present and not just whitespace.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Validates a rule set and returns every error found (empty means valid).
///
/// Checks run in a fixed order: schema version, empty rule list (which ends
/// validation early), then for each rule by index: null entry, blank id,
/// duplicate id, blank name, blank pattern, missing replacement, unsupported
/// flags and finally whether the pattern compiles with its flags.
pub fn validate(config: &MaskRulesConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.version != SUPPORTED_VERSION {
        errors.push(format!(
            "version is invalid (expected: {}, actual: {})",
            SUPPORTED_VERSION, config.version
        ));
    }

    if config.rules.is_empty() {
        errors.push("rules is empty".to_string());
        return errors;
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();

    for (i, entry) in config.rules.iter().enumerate() {
        let prefix = format!("rules[{}]", i);

        let Some(rule) = entry else {
            errors.push(format!("{} is null", prefix));
            continue;
        };

        match non_blank(rule.id.as_deref()) {
            None => errors.push(format!("{}.id is blank", prefix)),
            Some(id) => {
                if !seen_ids.insert(id) {
                    errors.push(format!("{}.id is duplicated: {}", prefix, id));
                }
            }
        }

        if non_blank(rule.name.as_deref()).is_none() {
            errors.push(format!("{}.name is blank", prefix));
        }

        let pattern = non_blank(rule.pattern.as_deref());
        if pattern.is_none() {
            errors.push(format!("{}.pattern is blank", prefix));
        }

        if rule.replacement.is_none() {
            errors.push(format!("{}.replacement is missing", prefix));
        }

        for name in &rule.flags {
            if RuleFlag::from_name(name).is_none() {
                let supported: Vec<&str> = RuleFlag::ALL.iter().map(|f| f.as_str()).collect();
                errors.push(format!(
                    "{}.flags contains an unsupported value: {} (supported: {})",
                    prefix,
                    name,
                    supported.join(", ")
                ));
            }
        }

        if let Some(pattern) = pattern {
            if let Err(e) = build_regex(pattern, &rule.known_flags()) {
                errors.push(format!(
                    "{}.pattern is not a valid regular expression: {}",
                    prefix, e
                ));
            }
        }
    }

    debug!("Rule validation finished with {} error(s).", errors.len());
    errors
}

/// Validates and turns a non-empty error list into [`MaskError::Validation`].
pub fn validate_or_fail(config: &MaskRulesConfig) -> Result<(), MaskError> {
    let errors = validate(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MaskError::Validation(errors))
    }
}
