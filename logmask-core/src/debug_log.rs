// logmask-core/src/debug_log.rs
//! PII-safe debug logging for matched text.
//!
//! Masking rules exist to hide sensitive data, so debug logs must not leak
//! the very values they mask. Matched text is reduced to a placeholder
//! unless `LOGMASK_ALLOW_DEBUG_PII=true` is set in the environment.

use log::debug;
use once_cell::sync::Lazy;

/// Read once; whether original matched text may appear in debug logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("LOGMASK_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Replaces sensitive text with a placeholder that only reveals its length.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn loggable(sensitive: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive.to_string()
    } else {
        redact_sensitive(sensitive)
    }
}

/// Logs one rule application: how many matches and the first matched value.
pub fn log_rule_applied_debug(rule_id: &str, count: u64, first_match: &str) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    debug!(
        "Rule '{}' replaced {} match(es), first match: '{}'",
        rule_id,
        count,
        loggable(first_match)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]");
    }

    #[test_log::test]
    fn test_log_rule_applied_debug_with_debug_enabled() {
        log_rule_applied_debug("email", 2, "a@example.com");
        assert_eq!(loggable("short"), if *PII_DEBUG_ALLOWED { "short" } else { "[REDACTED]" });
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("a@example.com"), "[REDACTED: 13 chars]");
    }
}
