// logmask-core/src/engines/regex_engine.rs
//! A `MaskingEngine` implementation that applies compiled regex rules in
//! order, counting every replacement.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::debug;

use crate::config::MaskRulesConfig;
use crate::debug_log::log_rule_applied_debug;
use crate::engine::{MaskResult, MaskingEngine};
use crate::errors::MaskError;
use crate::sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};
use crate::validators::validate_or_fail;

#[derive(Debug, Clone)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
}

impl RegexEngine {
    pub fn new(compiled_rules: CompiledRules) -> Self {
        Self { compiled_rules }
    }

    /// Validates and compiles `config`, then builds an engine from it.
    pub fn from_config(config: &MaskRulesConfig) -> Result<Self, MaskError> {
        validate_or_fail(config)?;
        let compiled_rules = compile_rules(config)?;
        debug!(
            "RegexEngine ready with {} compiled rule(s).",
            compiled_rules.len()
        );
        Ok(Self::new(compiled_rules))
    }
}

impl MaskingEngine for RegexEngine {
    fn mask(&self, text: &str, dry_run: bool) -> MaskResult {
        mask_text(text, &self.compiled_rules.rules, dry_run)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}

/// Replaces every non-overlapping match of `rule` in `input`, left to right.
///
/// Returns `None` when nothing matched. Searching resumes where the last
/// match ended, so an empty match directly after a non-empty one is counted
/// and replaced too (`b*` on `abc` gives `-a--c-`, four matches). After an
/// empty match the search steps over one character, which keeps patterns
/// that can match the empty string terminating.
fn apply_rule(input: &str, rule: &CompiledRule) -> Option<(String, u64)> {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;
    let mut count: u64 = 0;
    let mut first_match = None;
    let mut pos = 0;

    while let Some(caps) = rule.regex.captures_at(input, pos) {
        let Some(whole) = caps.get(0) else { break };
        output.push_str(&input[last_end..whole.start()]);
        caps.expand(&rule.replacement, &mut output);
        last_end = whole.end();
        count += 1;
        if first_match.is_none() {
            first_match = Some(whole.as_str());
        }

        if !whole.is_empty() {
            pos = whole.end();
            continue;
        }
        match input[whole.end()..].chars().next() {
            Some(next) => pos = whole.end() + next.len_utf8(),
            None => break,
        }
    }

    let first_match = first_match?;
    log_rule_applied_debug(&rule.id, count, first_match);
    output.push_str(&input[last_end..]);
    Some((output, count))
}

/// Applies `rules` in order to `text`.
///
/// Each enabled rule runs against the output of the rules before it, on dry
/// runs too, so dry-run counts always equal real-run counts. On a dry run the
/// returned text is `text` itself.
pub fn mask_text(text: &str, rules: &[CompiledRule], dry_run: bool) -> MaskResult {
    let mut current: Cow<'_, str> = Cow::Borrowed(text);
    let mut counts_per_rule: BTreeMap<String, u64> = BTreeMap::new();
    let mut total_count: u64 = 0;

    for rule in rules.iter().filter(|rule| rule.enabled) {
        if let Some((replaced, count)) = apply_rule(&current, rule) {
            *counts_per_rule.entry(rule.id.clone()).or_insert(0) += count;
            total_count += count;
            current = Cow::Owned(replaced);
        }
    }

    let output_text = if dry_run {
        text.to_owned()
    } else {
        current.into_owned()
    };

    MaskResult {
        output_text,
        counts_per_rule,
        total_count,
    }
}
