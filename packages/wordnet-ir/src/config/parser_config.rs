//! Parser configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use super::validation::{validate_sanitize_rules, Validatable};
use crate::shared::utils::sanitize::{IdSanitizer, SanitizeRule, DEFAULT_SANITIZE_RULES};

/// Supported YAML schema versions
const SUPPORTED_VERSIONS: &[u64] = &[1];

/// Knobs of the transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Copy the owning entry's `writtenForm` into each Sense record
    pub include_written_form_in_sense: bool,

    /// Copy the owning entry's `partOfSpeech` into each Sense record
    pub include_part_of_speech_in_sense: bool,

    /// Reject input paths without a `.xml` extension before reading them
    pub require_xml_extension: bool,

    /// Ordered identifier rewrite table
    pub sanitizer_rules: Vec<SanitizeRule>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            include_written_form_in_sense: true,
            include_part_of_speech_in_sense: true,
            require_xml_extension: true,
            sanitizer_rules: DEFAULT_SANITIZE_RULES.to_vec(),
        }
    }
}

impl ParserConfig {
    pub fn written_form_in_sense(mut self, enabled: bool) -> Self {
        self.include_written_form_in_sense = enabled;
        self
    }

    pub fn part_of_speech_in_sense(mut self, enabled: bool) -> Self {
        self.include_part_of_speech_in_sense = enabled;
        self
    }

    pub fn require_xml_extension(mut self, enabled: bool) -> Self {
        self.require_xml_extension = enabled;
        self
    }

    pub fn sanitizer_rules(mut self, rules: Vec<SanitizeRule>) -> Self {
        self.sanitizer_rules = rules;
        self
    }

    /// Build the sanitizer described by `sanitizer_rules`
    pub fn sanitizer(&self) -> IdSanitizer {
        IdSanitizer::new(self.sanitizer_rules.clone())
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    ///
    /// The document must carry `version: 1`; the `parser` section is
    /// optional and falls back to defaults field by field.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        let version = match value.get("version") {
            Some(v) => v.as_u64().ok_or(ConfigError::MissingVersion)?,
            None => return Err(ConfigError::MissingVersion),
        };
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let file: ConfigFileV1 = serde_yaml::from_value(value)?;
        file.parser.validate()?;
        Ok(file.parser)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: 1,
            parser: self.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Validatable for ParserConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_sanitize_rules(&self.sanitizer_rules)
    }
}
