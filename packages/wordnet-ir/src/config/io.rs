//! Configuration I/O (YAML)
//!
//! Defines the on-disk schema. Loading lives in `parser_config.rs`.

use serde::{Deserialize, Serialize};

use super::parser_config::ParserConfig;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u64,

    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::shared::utils::sanitize::SanitizeRule;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = ParserConfig::default().written_form_in_sense(false);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("include_written_form_in_sense: false"));

        let back = ParserConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_yaml_loading_partial_section() {
        let yaml_content = r#"
version: 1
parser:
  include_part_of_speech_in_sense: false
  sanitizer_rules:
    - disallowed: "/"
      replacement: "_"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ParserConfig::from_yaml(temp_file.path()).unwrap();
        assert!(config.include_written_form_in_sense);
        assert!(!config.include_part_of_speech_in_sense);
        assert_eq!(config.sanitizer_rules, vec![SanitizeRule::new('/', '_')]);
    }

    #[test]
    fn test_yaml_version_only() {
        let config = ParserConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ParserConfig::from_yaml_str("parser:\n  require_xml_extension: false\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ParserConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = ParserConfig::from_yaml_str("version: 1\nparser:\n  sanitise: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_conflicting_rules_rejected() {
        let yaml_content = r##"
version: 1
parser:
  sanitizer_rules:
    - { disallowed: "/", replacement: "#" }
    - { disallowed: "#", replacement: "$" }
"##;
        let result = ParserConfig::from_yaml_str(yaml_content);
        assert!(matches!(result, Err(ConfigError::SanitizerConflict { .. })));
    }
}
