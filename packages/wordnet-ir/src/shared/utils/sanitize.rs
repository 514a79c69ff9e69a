//! Identifier sanitization
//!
//! Graph stores restrict the characters allowed in document keys. Every
//! lexical-entry, sense and synset id, and every edge endpoint, goes
//! through [`IdSanitizer::sanitize`] exactly once before it is stored.
//!
//! Rules are applied in list order. No replacement character may itself
//! be a disallowed character, which makes sanitization idempotent
//! (checked by `config::validation`).

use serde::{Deserialize, Serialize};

/// One `(disallowed, replacement)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeRule {
    pub disallowed: char,
    pub replacement: char,
}

impl SanitizeRule {
    pub const fn new(disallowed: char, replacement: char) -> Self {
        Self {
            disallowed,
            replacement,
        }
    }
}

/// Characters rejected in graph-store keys, with their substitutes
pub const DEFAULT_SANITIZE_RULES: &[SanitizeRule] = &[
    SanitizeRule::new(' ', '_'),
    SanitizeRule::new('/', ':'),
    SanitizeRule::new('\\', ':'),
    SanitizeRule::new('&', '+'),
    SanitizeRule::new('#', '$'),
    SanitizeRule::new('?', '!'),
    SanitizeRule::new('"', '\''),
    SanitizeRule::new('<', '('),
    SanitizeRule::new('>', ')'),
    SanitizeRule::new('[', '('),
    SanitizeRule::new(']', ')'),
    SanitizeRule::new('{', '('),
    SanitizeRule::new('}', ')'),
    SanitizeRule::new('|', '!'),
    SanitizeRule::new('^', '*'),
    SanitizeRule::new('~', '-'),
    SanitizeRule::new('`', '\''),
];

/// Ordered character rewriter for identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSanitizer {
    rules: Vec<SanitizeRule>,
}

impl IdSanitizer {
    pub fn new(rules: Vec<SanitizeRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SanitizeRule] {
        &self.rules
    }

    pub fn is_disallowed(&self, c: char) -> bool {
        self.rules.iter().any(|r| r.disallowed == c)
    }

    /// Rewrite every disallowed character of `raw`
    pub fn sanitize(&self, raw: &str) -> String {
        // Most ids are already clean
        if !raw.chars().any(|c| self.is_disallowed(c)) {
            return raw.to_string();
        }

        let mut out = raw.to_string();
        for rule in &self.rules {
            if out.contains(rule.disallowed) {
                out = out.replace(rule.disallowed, rule.replacement.encode_utf8(&mut [0; 4]));
            }
        }
        out
    }

    /// True when `id` is a fixed point of [`Self::sanitize`]
    pub fn is_clean(&self, id: &str) -> bool {
        !id.chars().any(|c| self.is_disallowed(c))
    }
}

impl Default for IdSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_SANITIZE_RULES.to_vec())
    }
}

/// Sanitize with the default rule table
pub fn sanitize_id(raw: &str) -> String {
    IdSanitizer::default().sanitize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_id_is_unchanged() {
        assert_eq!(sanitize_id("oewn-run-v"), "oewn-run-v");
        assert_eq!(sanitize_id("oewn-'s_Gravenhage-n"), "oewn-'s_Gravenhage-n");
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        assert_eq!(sanitize_id("a/b/c"), "a:b:c");
        assert_eq!(sanitize_id("x y z"), "x_y_z");
        assert_eq!(sanitize_id("AT&T#1"), "AT+T$1");
    }

    #[test]
    fn test_rules_apply_in_list_order() {
        // '/' -> '#' runs first, then '#' -> '$' catches the result
        let sanitizer = IdSanitizer::new(vec![
            SanitizeRule::new('/', '#'),
            SanitizeRule::new('#', '$'),
        ]);
        assert_eq!(sanitizer.sanitize("a/b"), "a$b");

        // Reversed order leaves the intermediate character behind
        let reversed = IdSanitizer::new(vec![
            SanitizeRule::new('#', '$'),
            SanitizeRule::new('/', '#'),
        ]);
        assert_eq!(reversed.sanitize("a/b"), "a#b");
    }

    #[test]
    fn test_default_table_replacements_are_allowed() {
        let sanitizer = IdSanitizer::default();
        for rule in DEFAULT_SANITIZE_RULES {
            assert!(
                !sanitizer.is_disallowed(rule.replacement),
                "replacement {:?} is itself disallowed",
                rule.replacement
            );
        }
    }

    #[test]
    fn test_sanitized_output_is_clean() {
        let sanitizer = IdSanitizer::default();
        let out = sanitizer.sanitize("weird <id> [with] {all} |sorts| ^of~ `chars`?\"\\");
        assert!(sanitizer.is_clean(&out));
        assert_eq!(sanitizer.sanitize(&out), out);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(sanitize_id("oewn-café-n"), "oewn-café-n");
    }
}
