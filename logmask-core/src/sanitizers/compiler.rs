//! compiler.rs - Compiles declarative masking rules into executable matchers.
//!
//! Flag handling goes through [`FLAG_TABLE`], a closed mapping from
//! [`RuleFlag`] to the `RegexBuilder` option it turns on. Adding a flag means
//! adding a variant to `RuleFlag` and one row here.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{MaskRulesConfig, RuleFlag};
use crate::errors::MaskError;

/// Upper bound on the compiled size of a single rule's regex.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

type FlagSetter = fn(&mut RegexBuilder) -> &mut RegexBuilder;

fn set_case_insensitive(builder: &mut RegexBuilder) -> &mut RegexBuilder {
    builder.case_insensitive(true)
}

/// Declarative flag -> regex builder option.
pub const FLAG_TABLE: &[(RuleFlag, FlagSetter)] =
    &[(RuleFlag::CaseInsensitive, set_case_insensitive)];

/// A single compiled masking rule. Immutable once built.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The rule id, used as the key for match counts.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Effective enabled state (an omitted `enabled` compiles to `true`).
    pub enabled: bool,
    /// The compiled pattern.
    pub regex: Regex,
    /// Replacement template, expanded per match. Positional references are
    /// already braced (see [`normalize_replacement`]).
    pub replacement: String,
}

/// The ordered set of compiled rules for one run.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn new(rules: Vec<CompiledRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builds a regex from a pattern and a set of flags, applying each flag
/// through [`FLAG_TABLE`]. Shared by the validator and the compiler so both
/// see exactly the same syntax.
pub fn build_regex(pattern: &str, flags: &[RuleFlag]) -> Result<Regex, regex::Error> {
    let mut builder = RegexBuilder::new(pattern);
    builder.size_limit(REGEX_SIZE_LIMIT);
    for (flag, apply) in FLAG_TABLE {
        if flags.contains(flag) {
            apply(&mut builder);
        }
    }
    builder.build()
}

/// Rewrites positional group references `$<digits>` as `${<digits>}`.
///
/// `Captures::expand` reads `$1abc` as the named group `1abc`. Here the first
/// digit always starts a group number and each following digit is taken only
/// while the number stays within `group_count`, so `$1xxxx` is group 1
/// followed by `xxxx` and, with fewer than twelve groups, `$12` is group 1
/// followed by `2`. `$$` and `${name}` pass through unchanged.
pub fn normalize_replacement(template: &str, group_count: usize) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some(first) if first.is_ascii_digit() => {
                chars.next();
                let mut group = first.to_digit(10).unwrap_or(0) as usize;
                while let Some(next) = chars.peek().and_then(|d| d.to_digit(10)) {
                    let longer = group * 10 + next as usize;
                    if longer > group_count {
                        break;
                    }
                    group = longer;
                    chars.next();
                }
                out.push_str(&format!("${{{group}}}"));
            }
            _ => out.push('$'),
        }
    }
    out
}

/// Compiles every non-null rule of `config`, preserving order.
///
/// The config is expected to have passed [`crate::validators::validate`];
/// it is not re-validated here. Should an unvalidated pattern fail to
/// compile, the error is returned rather than panicking.
pub fn compile_rules(config: &MaskRulesConfig) -> Result<CompiledRules, MaskError> {
    debug!("Starting compilation of {} rule entries.", config.rules.len());

    let mut compiled = Vec::with_capacity(config.rules.len());

    for rule in config.iter_rules() {
        let id = rule.id.clone().unwrap_or_default();
        let Some(pattern) = rule.pattern.as_deref() else {
            warn!("Skipping rule '{}' because its pattern is missing.", id);
            continue;
        };

        let regex = build_regex(pattern, &rule.known_flags())
            .map_err(|e| MaskError::RuleCompilationError(id.clone(), e))?;

        log::debug!(
            target: "logmask_core::sanitizer",
            "Rule '{}' compiled successfully.",
            id
        );

        let replacement = normalize_replacement(
            rule.replacement.as_deref().unwrap_or_default(),
            regex.captures_len() - 1,
        );

        compiled.push(CompiledRule {
            name: rule.name.clone().unwrap_or_else(|| id.clone()),
            enabled: rule.is_enabled_effective(),
            regex,
            replacement,
            id,
        });
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
    Ok(CompiledRules::new(compiled))
}
