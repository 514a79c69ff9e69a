//! Configuration validation

use std::collections::HashSet;

use super::error::{ConfigError, ConfigResult};
use crate::shared::utils::sanitize::SanitizeRule;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}

/// Reject rule tables that would make sanitization non-idempotent
pub fn validate_sanitize_rules(rules: &[SanitizeRule]) -> ConfigResult<()> {
    let mut disallowed = HashSet::with_capacity(rules.len());
    for rule in rules {
        if !disallowed.insert(rule.disallowed) {
            return Err(ConfigError::DuplicateRule(rule.disallowed));
        }
    }

    for rule in rules {
        if disallowed.contains(&rule.replacement) {
            return Err(ConfigError::SanitizerConflict {
                disallowed: rule.disallowed,
                replacement: rule.replacement,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::sanitize::DEFAULT_SANITIZE_RULES;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(validate_sanitize_rules(DEFAULT_SANITIZE_RULES).is_ok());
    }

    #[test]
    fn test_chained_replacement_rejected() {
        let rules = [SanitizeRule::new('/', '#'), SanitizeRule::new('#', '$')];
        let err = validate_sanitize_rules(&rules).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::SanitizerConflict {
                disallowed: '/',
                replacement: '#'
            }
        ));
    }

    #[test]
    fn test_self_replacement_rejected() {
        let rules = [SanitizeRule::new('/', '/')];
        assert!(validate_sanitize_rules(&rules).is_err());
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let rules = [SanitizeRule::new('/', ':'), SanitizeRule::new('/', '_')];
        assert!(matches!(
            validate_sanitize_rules(&rules),
            Err(ConfigError::DuplicateRule('/'))
        ));
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert!(validate_sanitize_rules(&[]).is_ok());
    }
}
