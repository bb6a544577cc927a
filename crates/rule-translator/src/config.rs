//! Translator settings.

use crate::{error::SettingsError, rule::Connective};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorSettings {
    /// Connective used when a group carries no `condition`.
    pub default_condition: Connective,

    /// Separator used to split a string value for IN / BETWEEN operators.
    pub list_delimiter: String,

    /// Trim whitespace around each split list element.
    pub trim_list_items: bool,

    /// Prefix of generated placeholder names (`p` gives `p0`, `p1`, ...).
    pub param_prefix: String,

    /// Convert values according to the rule's declared `type`.
    pub coerce_types: bool,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            default_condition: Connective::And,
            list_delimiter: ",".to_string(),
            trim_list_items: true,
            param_prefix: "p".to_string(),
            coerce_types: true,
        }
    }
}

impl TranslatorSettings {
    pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
        let settings: TranslatorSettings = serde_json::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.list_delimiter.is_empty() {
            return Err(SettingsError::Invalid {
                key: "list_delimiter",
                message: "must not be empty".into(),
            });
        }

        // placeholder names end up in SQL text, so keep them to identifier characters
        let valid_prefix = self
            .param_prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .param_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_prefix {
            return Err(SettingsError::Invalid {
                key: "param_prefix",
                message: format!("'{}' is not a valid identifier", self.param_prefix),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let settings = TranslatorSettings::from_json_str(r#"{"param_prefix": "qb"}"#).unwrap();
        assert_eq!(settings.param_prefix, "qb");
        assert_eq!(settings.list_delimiter, ",");
        assert_eq!(settings.default_condition, Connective::And);
        assert!(settings.coerce_types);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = TranslatorSettings::from_json_str(r#"{"delimiter": ";"}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_prefix() {
        let err = TranslatorSettings::from_json_str(r#"{"param_prefix": "p; DROP"}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                key: "param_prefix",
                ..
            }
        ));

        let err = TranslatorSettings::from_json_str(r#"{"list_delimiter": ""}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                key: "list_delimiter",
                ..
            }
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default_condition": "OR", "list_delimiter": "|", "trim_list_items": false}}"#
        )
        .unwrap();

        let settings = TranslatorSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.default_condition, Connective::Or);
        assert_eq!(settings.list_delimiter, "|");
        assert!(!settings.trim_list_items);
    }
}
