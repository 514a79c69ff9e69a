//! Dynamic attribute bags
//!
//! Senses and synsets keep the whole attribute set of their markup
//! element, so node records are open maps rather than fixed structs.
//! A handful of keys are written by the extractors themselves; those are
//! listed in [`RESERVED_SENSE_KEYS`] and [`RESERVED_SYNSET_KEYS`] and a
//! markup attribute with the same name is rejected instead of silently
//! overwritten.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys written by the extractors
pub mod keys {
    pub const ID: &str = "id";
    pub const WRITTEN_FORM: &str = "writtenForm";
    pub const PART_OF_SPEECH: &str = "partOfSpeech";
    pub const PRONUNCIATION: &str = "pronunciation";
    pub const SYNSET: &str = "synset";
    pub const SUBCAT: &str = "subcat";
    pub const DEFINITION: &str = "Definition";
    pub const ILI_DEFINITION: &str = "ILIDefinition";
    pub const EXAMPLES: &str = "Examples";
    pub const SUBCATEGORIZATION_FRAME: &str = "subcategorizationFrame";
    pub const TARGET: &str = "target";
    pub const REL_TYPE: &str = "relType";
}

/// Keys injected into a Sense record from its owning lexical entry
pub const RESERVED_SENSE_KEYS: &[&str] = &[keys::WRITTEN_FORM, keys::PART_OF_SPEECH];

/// Keys filled from Synset children
pub const RESERVED_SYNSET_KEYS: &[&str] = &[keys::DEFINITION, keys::ILI_DEFINITION, keys::EXAMPLES];

/// Attribute value: plain text, or an ordered sequence (`Examples`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::Text(_) => None,
            AttrValue::List(items) => Some(items),
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

/// Node record: attribute name → value, ordered by key
pub type Attributes = BTreeMap<String, AttrValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_key_lists_are_disjoint() {
        for key in RESERVED_SENSE_KEYS {
            assert!(!RESERVED_SYNSET_KEYS.contains(key), "{key} reserved twice");
        }
    }

    #[test]
    fn test_reserved_keys_do_not_shadow_identity_attributes() {
        // id/synset/subcat are read from markup and must stay in the record
        for key in [keys::ID, keys::SYNSET, keys::SUBCAT] {
            assert!(!RESERVED_SENSE_KEYS.contains(&key));
            assert!(!RESERVED_SYNSET_KEYS.contains(&key));
        }
    }

    #[test]
    fn test_attr_value_serializes_untagged() {
        let mut attrs = Attributes::new();
        attrs.insert("writtenForm".into(), "run".into());
        attrs.insert("Examples".into(), vec!["a".to_string(), "b".to_string()].into());

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"Examples":["a","b"],"writtenForm":"run"}"#);

        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn test_accessors() {
        let text = AttrValue::from("v");
        assert_eq!(text.as_text(), Some("v"));
        assert!(text.as_list().is_none());

        let list = AttrValue::from(vec!["x".to_string()]);
        assert_eq!(list.as_list(), Some(&["x".to_string()][..]));
        assert!(list.as_text().is_none());
    }
}
